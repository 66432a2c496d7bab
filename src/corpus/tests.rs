//! Corpus Module Tests
//!
//! Validates the text providers and cross-corpus frequency comparison.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use crate::core::concordancer::Concordancer;
    use crate::core::error::ErrorKind;
    use crate::corpus::frequency::compare_frequencies;
    use crate::corpus::provider::{DirectoryProvider, InMemoryProvider, TextProvider};

    #[test]
    fn test_in_memory_fetch_and_names() {
        let provider = InMemoryProvider::new()
            .with_text("othello", "jealousy is a green-eyed monster")
            .with_text("lear", "nothing will come of nothing");

        assert_eq!(provider.names(), vec!["lear", "othello"]);
        assert!(provider.fetch("othello").unwrap().contains("jealousy"));
    }

    #[test]
    fn test_in_memory_missing_text() {
        let provider = InMemoryProvider::new();
        let err = provider.fetch("hamlet").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    }

    #[test]
    fn test_directory_provider_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("othello.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "o beware my lord of jealousy").unwrap();

        let provider = DirectoryProvider::new(dir.path());
        assert_eq!(provider.names(), vec!["othello.txt"]);
        assert!(provider.fetch("othello.txt").unwrap().contains("jealousy"));
    }

    #[test]
    fn test_directory_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryProvider::new(dir.path());

        let err = provider.fetch("missing.txt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    }

    #[test]
    fn test_compare_frequencies_orders_by_given_names() {
        let provider = InMemoryProvider::new()
            .with_text("othello", "jealous thoughts and jealous confirmations")
            .with_text("lear", "no jealous word here")
            .with_text("shrew", "none at all");
        let kwic = Concordancer::default();

        let names = vec![
            "othello".to_string(),
            "lear".to_string(),
            "shrew".to_string(),
        ];
        let points = compare_frequencies(&kwic, &provider, &names, "jealous").unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].corpus, "othello");
        assert_eq!(points[0].count, 2);
        assert_eq!(points[1].count, 1);
        assert_eq!(points[2].count, 0);
    }

    #[test]
    fn test_compare_frequencies_propagates_missing_source() {
        let provider = InMemoryProvider::new();
        let kwic = Concordancer::default();

        let err = compare_frequencies(&kwic, &provider, &["ghost".to_string()], "word")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    }
}
