use serde::{Serialize, Deserialize};

/// One keyword-in-context line: the matched span with its carved context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordanceLine {
    pub start: usize,          // token index of the first matched token
    pub len: usize,            // matched span length, in tokens
    pub left_context: String,
    pub match_text: String,
    pub right_context: String,
    pub line: String,          // flattened form for file export
}

/// Full concordance of one query over one text.
///
/// `total_count` always reflects the true number of matching positions;
/// `lines` may be shorter once the line cap applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcordanceResult {
    pub lines: Vec<ConcordanceLine>,
    pub total_count: usize,
    pub query: Vec<String>,
}

impl ConcordanceResult {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Per-corpus frequency of one query, the unit of comparison charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyPoint {
    pub corpus: String,
    pub count: usize,
}
