use std::fs;
use std::path::Path;
use crate::concordance::results::ConcordanceResult;
use crate::core::error::Result;
use crate::parallel::batch::BatchRow;

/// Newline-joined concordance lines, ready for a plain-text download.
pub fn to_plain_text(result: &ConcordanceResult) -> String {
    let mut out = result
        .lines
        .iter()
        .map(|line| line.line.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

pub fn write_plain_text(path: &Path, result: &ConcordanceResult) -> Result<()> {
    fs::write(path, to_plain_text(result))?;
    Ok(())
}

/// CSV table of batch rows with a `source,query,line` header.
pub fn rows_to_csv(rows: &[BatchRow]) -> String {
    let mut out = String::from("source,query,line\n");
    for row in rows {
        out.push_str(&csv_field(&row.source));
        out.push(',');
        out.push_str(&csv_field(&row.query));
        out.push(',');
        out.push_str(&csv_field(&row.line));
        out.push('\n');
    }
    out
}

pub fn write_csv(path: &Path, rows: &[BatchRow]) -> Result<()> {
    fs::write(path, rows_to_csv(rows))?;
    Ok(())
}

/// JSON form of a full result, for API-style collaborators.
pub fn to_json(result: &ConcordanceResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concordance::results::{ConcordanceLine, ConcordanceResult};

    fn sample_result() -> ConcordanceResult {
        ConcordanceResult {
            lines: vec![
                ConcordanceLine {
                    start: 1,
                    len: 1,
                    left_context: "the".to_string(),
                    match_text: "cat".to_string(),
                    right_context: "sat".to_string(),
                    line: "the cat sat".to_string(),
                },
                ConcordanceLine {
                    start: 4,
                    len: 1,
                    left_context: "on the".to_string(),
                    match_text: "cat".to_string(),
                    right_context: "mat".to_string(),
                    line: "on the cat mat".to_string(),
                },
            ],
            total_count: 2,
            query: vec!["cat".to_string()],
        }
    }

    #[test]
    fn test_plain_text_newline_joined() {
        let text = to_plain_text(&sample_result());
        assert_eq!(text, "the cat sat\non the cat mat\n");
    }

    #[test]
    fn test_plain_text_empty_result() {
        let empty = ConcordanceResult {
            lines: Vec::new(),
            total_count: 0,
            query: vec!["dog".to_string()],
        };
        assert_eq!(to_plain_text(&empty), "");
    }

    #[test]
    fn test_write_plain_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concordance.txt");

        write_plain_text(&path, &sample_result()).unwrap();

        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, "the cat sat\non the cat mat\n");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let rows = vec![BatchRow {
            source: "othello.txt".to_string(),
            query: "jealous".to_string(),
            line: "o beware my lord of jealousy".to_string(),
        }];

        let csv = rows_to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("source,query,line"));
        assert_eq!(
            lines.next(),
            Some("othello.txt,jealous,o beware my lord of jealousy")
        );
    }

    #[test]
    fn test_csv_quotes_embedded_separators() {
        let rows = vec![BatchRow {
            source: "a,b.txt".to_string(),
            query: "say \"so\"".to_string(),
            line: "plain line".to_string(),
        }];

        let csv = rows_to_csv(&rows);
        assert!(csv.contains("\"a,b.txt\""));
        assert!(csv.contains("\"say \"\"so\"\"\""));
    }

    #[test]
    fn test_json_round_trip() {
        let result = sample_result();
        let json = to_json(&result).unwrap();

        let parsed: ConcordanceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
