use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::concordance::engine;
use crate::concordance::results::ConcordanceResult;
use crate::core::config::ConcordanceConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::ConcordanceRequest;
use crate::query::cache::{fingerprint, ConcordanceCache, ConcordanceKey};
use crate::query::parser::parse_query;

/// The crate's entry point: wires the tokenizer and the concordance engine
/// together behind input validation and two read-through caches, one for
/// tokenizations and one for finished results.
pub struct Concordancer {
    pub config: ConcordanceConfig,
    pub tokenizer: Box<dyn Tokenizer>,
    pub cache: ConcordanceCache,
    token_memo: RwLock<LruCache<u64, Arc<Vec<Token>>>>,
}

impl Concordancer {
    pub fn new(config: ConcordanceConfig) -> Self {
        let memo_cap =
            NonZeroUsize::new(config.token_memo_size.max(1)).unwrap_or(NonZeroUsize::MIN);
        Concordancer {
            cache: ConcordanceCache::new(config.cache_size),
            tokenizer: Box::new(WordTokenizer::default()),
            token_memo: RwLock::new(LruCache::new(memo_cap)),
            config,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Tokenize a text, reusing the memoized sequence when the same text
    /// recurs. The sequence is immutable once built.
    pub fn tokenize(&self, text: &str) -> Arc<Vec<Token>> {
        let key = fingerprint(text);
        if let Some(tokens) = self.token_memo.write().get(&key) {
            return Arc::clone(tokens);
        }

        let tokens = Arc::new(self.tokenizer.tokenize(text));
        self.token_memo.write().put(key, Arc::clone(&tokens));
        tokens
    }

    /// Concordance with the configured width and line cap.
    pub fn concordance(&self, text: &str, query: &str) -> Result<ConcordanceResult> {
        self.concordance_with(text, query, self.config.width, self.config.max_lines)
    }

    /// Concordance with explicit width and line cap. All validation happens
    /// here; the engine itself assumes pre-validated inputs.
    pub fn concordance_with(
        &self,
        text: &str,
        query: &str,
        width: usize,
        max_lines: usize,
    ) -> Result<ConcordanceResult> {
        if width == 0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "width must be a positive integer".to_string(),
            ));
        }
        if max_lines == 0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "number of lines must be a positive integer".to_string(),
            ));
        }
        self.check_text_size(text)?;

        let query = parse_query(query)?;
        let key = ConcordanceKey {
            text_fingerprint: fingerprint(text),
            query: query.clone(),
            width,
            max_lines,
        };

        if let Some(result) = self.cache.get(&key) {
            tracing::debug!("concordance cache hit for '{}'", key.query.join(" "));
            return Ok(result);
        }

        let tokens = self.tokenize(text);
        let result = engine::concordance(&tokens, &query, width, max_lines)?;
        self.cache.put(key, result.clone());
        Ok(result)
    }

    /// The request-tuple entry point.
    pub fn submit(&self, request: &ConcordanceRequest) -> Result<ConcordanceResult> {
        self.concordance_with(
            &request.text,
            &request.query,
            request.width,
            request.max_lines,
        )
    }

    /// True occurrence count of the query in the text, unaffected by any
    /// line cap. This is what frequency displays and comparison charts use.
    pub fn frequency(&self, text: &str, query: &str) -> Result<usize> {
        self.check_text_size(text)?;
        let query = parse_query(query)?;
        let tokens = self.tokenize(text);
        Ok(engine::count_matches(&tokens, &query))
    }

    fn check_text_size(&self, text: &str) -> Result<()> {
        let chars = text.chars().count();
        if chars > self.config.max_text_chars {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "text is {} characters, limit is {}",
                    chars, self.config.max_text_chars
                ),
            ));
        }
        Ok(())
    }
}

impl Default for Concordancer {
    fn default() -> Self {
        Concordancer::new(ConcordanceConfig::default())
    }
}
