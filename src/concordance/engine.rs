use crate::analysis::token::Token;
use crate::concordance::results::{ConcordanceLine, ConcordanceResult};
use crate::core::error::{Error, ErrorKind, Result};

/// Find every occurrence of `query` in `tokens` and carve a centered
/// context window for the first `max_lines` of them.
///
/// The scan always covers the whole token sequence: `total_count` reports
/// the true number of matching positions even when `max_lines` truncates
/// the returned lines.
pub fn concordance(
    tokens: &[Token],
    query: &[String],
    width: usize,
    max_lines: usize,
) -> Result<ConcordanceResult> {
    if query.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            "enter a word or phrase".to_string(),
        ));
    }

    let starts = match_positions(tokens, query);
    let total_count = starts.len();

    let mut lines = Vec::with_capacity(total_count.min(max_lines));
    for &start in starts.iter().take(max_lines) {
        lines.push(build_line(tokens, start, query.len(), width));
    }

    Ok(ConcordanceResult {
        lines,
        total_count,
        query: query.to_vec(),
    })
}

/// Every start index whose token run equals the query elementwise, in scan
/// order. Overlapping occurrences are each reported at their own index.
pub fn match_positions(tokens: &[Token], query: &[String]) -> Vec<usize> {
    if query.is_empty() || query.len() > tokens.len() {
        return Vec::new();
    }

    let mut starts = Vec::new();
    for i in 0..=tokens.len() - query.len() {
        if tokens[i..i + query.len()]
            .iter()
            .zip(query)
            .all(|(token, term)| token.text == *term)
        {
            starts.push(i);
        }
    }
    starts
}

/// Count-only scan for frequency displays, unaffected by any line cap.
pub fn count_matches(tokens: &[Token], query: &[String]) -> usize {
    match_positions(tokens, query).len()
}

fn build_line(tokens: &[Token], start: usize, len: usize, width: usize) -> ConcordanceLine {
    let match_text = join(&tokens[start..start + len]);

    // The match renders at full length; width governs the context only.
    let budget = width.saturating_sub(match_text.chars().count());
    let left_budget = (budget + 1) / 2; // odd leftover goes left
    let right_budget = budget / 2;

    let left_context = left_window(&tokens[..start], left_budget);
    let right_context = right_window(&tokens[start + len..], right_budget);

    let mut line = String::with_capacity(
        left_context.len() + match_text.len() + right_context.len() + 2,
    );
    if !left_context.is_empty() {
        line.push_str(&left_context);
        line.push(' ');
    }
    line.push_str(&match_text);
    if !right_context.is_empty() {
        line.push(' ');
        line.push_str(&right_context);
    }

    ConcordanceLine {
        start,
        len,
        left_context,
        match_text,
        right_context,
        line,
    }
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last `budget` characters of the space-joined tokens before the match.
/// Only joins as many trailing tokens as the budget can show.
fn left_window(tokens: &[Token], budget: usize) -> String {
    let mut needed = 0;
    let mut chars = 0;
    for token in tokens.iter().rev() {
        if chars >= budget {
            break;
        }
        chars += token.text.chars().count() + 1;
        needed += 1;
    }
    tail_chars(&join(&tokens[tokens.len() - needed..]), budget)
}

/// First `budget` characters of the space-joined tokens after the match.
fn right_window(tokens: &[Token], budget: usize) -> String {
    let mut needed = 0;
    let mut chars = 0;
    for token in tokens.iter() {
        if chars >= budget {
            break;
        }
        chars += token.text.chars().count() + 1;
        needed += 1;
    }
    head_chars(&join(&tokens[..needed]), budget)
}

fn tail_chars(text: &str, budget: usize) -> String {
    let total = text.chars().count();
    if total <= budget {
        return text.to_string();
    }
    text.chars().skip(total - budget).collect()
}

fn head_chars(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}
