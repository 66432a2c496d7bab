use crate::core::error::{Error, ErrorKind, Result};

/// Normalize a user query the same way source text is normalized:
/// lowercased and split on whitespace.
pub fn parse_query(input: &str) -> Result<Vec<String>> {
    let terms: Vec<String> = input
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect();

    if terms.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            "enter a word or phrase".to_string(),
        ));
    }

    Ok(terms)
}

/// Parse a width or line-count value entered as free text.
/// Collaborators call this before a request ever reaches the engine.
pub fn parse_limit(label: &str, raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let value: usize = trimmed.parse().map_err(|_| {
        Error::new(
            ErrorKind::InvalidParameter,
            format!("{} must be a positive integer, got '{}'", label, trimmed),
        )
    })?;

    if value == 0 {
        return Err(Error::new(
            ErrorKind::InvalidParameter,
            format!("{} must be a positive integer, got 0", label),
        ));
    }

    Ok(value)
}
