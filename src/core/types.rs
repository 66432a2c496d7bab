use serde::{Serialize, Deserialize};

/// One unit of concordance work: a text, a query and the display limits.
/// Built per user action, consumed synchronously, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcordanceRequest {
    pub text: String,
    pub query: String,
    pub width: usize,
    pub max_lines: usize,
}

impl ConcordanceRequest {
    pub fn new(text: String, query: String, width: usize, max_lines: usize) -> Self {
        ConcordanceRequest {
            text,
            query,
            width,
            max_lines,
        }
    }
}
