#[derive(Debug, Clone)]
pub struct ConcordanceConfig {
    pub width: usize,            // characters per concordance line
    pub max_lines: usize,        // cap on lines returned per request
    pub max_text_chars: usize,   // input text ceiling, in characters
    pub cache_size: usize,       // result cache capacity, in entries
    pub token_memo_size: usize,  // memoized tokenizations kept per process
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        ConcordanceConfig {
            width: 79,                  // one classic terminal line
            max_lines: 25,
            max_text_chars: 1_000_000,
            cache_size: 256,
            token_memo_size: 64,
        }
    }
}
