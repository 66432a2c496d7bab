//! Core Module Tests
//!
//! Validates the Concordancer facade: input validation, caching,
//! tokenization memoization and the request entry point.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::core::concordancer::Concordancer;
    use crate::core::config::ConcordanceConfig;
    use crate::core::error::ErrorKind;
    use crate::core::types::ConcordanceRequest;

    const TEXT: &str = "The cat sat on the mat. The cat slept.";

    // ============================================================
    // VALIDATION
    // ============================================================

    #[test]
    fn test_rejects_zero_width() {
        let kwic = Concordancer::default();
        let err = kwic.concordance_with(TEXT, "cat", 0, 10).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_rejects_zero_max_lines() {
        let kwic = Concordancer::default();
        let err = kwic.concordance_with(TEXT, "cat", 79, 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_rejects_empty_query() {
        let kwic = Concordancer::default();
        let err = kwic.concordance(TEXT, "  ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQuery);
    }

    #[test]
    fn test_rejects_oversize_text() {
        let config = ConcordanceConfig {
            max_text_chars: 10,
            ..ConcordanceConfig::default()
        };
        let kwic = Concordancer::new(config);

        let err = kwic.concordance("a text definitely over ten characters", "text")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    // ============================================================
    // CACHING & IDEMPOTENCE
    // ============================================================

    #[test]
    fn test_repeat_request_hits_cache_and_matches() {
        let kwic = Concordancer::default();

        let first = kwic.concordance(TEXT, "cat").unwrap();
        let second = kwic.concordance(TEXT, "cat").unwrap();

        assert_eq!(first, second);
        assert!(kwic.cache.stats().hit_count >= 1);
    }

    #[test]
    fn test_tokenize_memoizes_per_text() {
        let kwic = Concordancer::default();

        let a = kwic.tokenize(TEXT);
        let b = kwic.tokenize(TEXT);
        assert!(Arc::ptr_eq(&a, &b));
    }

    // ============================================================
    // ENTRY POINTS
    // ============================================================

    #[test]
    fn test_submit_equals_explicit_call() {
        let kwic = Concordancer::default();
        let request =
            ConcordanceRequest::new(TEXT.to_string(), "the cat".to_string(), 30, 5);

        let via_request = kwic.submit(&request).unwrap();
        let via_call = kwic.concordance_with(TEXT, "the cat", 30, 5).unwrap();
        assert_eq!(via_request, via_call);
    }

    #[test]
    fn test_frequency_reports_true_count() {
        let kwic = Concordancer::default();

        assert_eq!(kwic.frequency(TEXT, "cat").unwrap(), 2);
        assert_eq!(kwic.frequency(TEXT, "dog").unwrap(), 0);

        // the line cap never leaks into frequency counts
        let capped = kwic.concordance_with(TEXT, "cat", 79, 1).unwrap();
        assert_eq!(capped.lines.len(), 1);
        assert_eq!(capped.total_count, 2);
    }

    #[test]
    fn test_query_matching_is_case_insensitive() {
        let kwic = Concordancer::default();
        let result = kwic.concordance(TEXT, "THE CAT").unwrap();
        assert_eq!(result.total_count, 2);
    }
}
