use crate::analysis::token::{Token, TokenType};
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Unicode word-boundary tokenizer.
///
/// Letter/digit runs become word tokens and punctuation marks become their
/// own tokens, so the token stream mirrors the source text word for word.
/// Interior apostrophes ("don't") survive via UAX-29 segmentation; interior
/// hyphens are re-joined so compounds like "well-known" stay one token.
#[derive(Clone)]
pub struct WordTokenizer {
    pub lowercase: bool,
    pub max_token_chars: usize,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        WordTokenizer {
            lowercase: true,
            max_token_chars: 255,
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let processed = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let segments: Vec<&str> = processed.split_word_bounds().collect();
        let mut tokens = Vec::new();
        let mut position = 0u32;
        let mut offset = 0usize;
        let mut i = 0;

        while i < segments.len() {
            let seg = segments[i];
            let seg_start = offset;
            offset += seg.len();
            i += 1;

            if seg.chars().all(char::is_whitespace) {
                continue;
            }

            if seg.chars().any(char::is_alphanumeric) {
                let mut word = seg.to_string();
                // re-join compounds that UAX-29 splits on interior hyphens
                while i + 1 < segments.len()
                    && segments[i] == "-"
                    && segments[i + 1].chars().any(char::is_alphanumeric)
                {
                    word.push('-');
                    word.push_str(segments[i + 1]);
                    offset += segments[i].len() + segments[i + 1].len();
                    i += 2;
                }

                if word.chars().count() <= self.max_token_chars {
                    let token_type = if word.chars().all(|c| c.is_numeric()) {
                        TokenType::Number
                    } else {
                        TokenType::Word
                    };
                    tokens.push(Token::new(word, position, seg_start, token_type));
                    position += 1;
                }
                continue;
            }

            tokens.push(Token::new(
                seg.to_string(),
                position,
                seg_start,
                TokenType::Punctuation,
            ));
            position += 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(Self {
            lowercase: self.lowercase,
            max_token_chars: self.max_token_chars,
        })
    }
}
