use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // Normalized token text
    pub position: u32,     // Index in the token sequence
    pub offset: usize,     // Byte offset in the normalized source text
    pub length: usize,     // Token length in bytes
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Word,
    Number,
    Punctuation,
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize, token_type: TokenType) -> Self {
        let length = text.len();
        Token {
            text,
            position,
            offset,
            length,
            token_type,
        }
    }
}
