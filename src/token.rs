//! Token representation for exercise text.
//!
//! A Token covers one run of the original text: a word (with surrounding
//! punctuation split off), a space run, a newline run, or leftover
//! non-word content. Concatenating the raw text of all tokens in order
//! reconstructs the input exactly.

use serde::{Deserialize, Serialize};

/// The type of token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenKind {
    /// A word, possibly carrying leading/trailing punctuation
    #[default]
    Word,
    /// A whitespace run without newlines
    Space,
    /// A whitespace run containing at least one newline
    Newline,
    /// Non-whitespace content with no word core (e.g. "...", "—")
    TrailingText,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Space => "SPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::TrailingText => "TRAILING",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of this token
    pub kind: TokenKind,

    /// 0-based char offset in the original text where the raw text begins
    pub start: usize,

    /// The verbatim text covered by this token
    pub text: String,

    /// Leading punctuation of a Word token (empty otherwise)
    pub prefix: String,

    /// The word core: letters plus internal single hyphens (Word only)
    pub core: String,

    /// Trailing punctuation of a Word token (empty otherwise)
    pub suffix: String,

    /// Number of '\n' characters in a Newline token (0 otherwise)
    pub newlines: usize,
}

impl Token {
    /// Create a non-word token covering `text` at `start`
    pub fn with_text(kind: TokenKind, text: String, start: usize) -> Self {
        Token {
            kind,
            start,
            text,
            ..Default::default()
        }
    }

    /// Create a Word token from its prefix/core/suffix parts
    pub fn word(prefix: String, core: String, suffix: String, start: usize) -> Self {
        let text = format!("{prefix}{core}{suffix}");
        Token {
            kind: TokenKind::Word,
            start,
            text,
            prefix,
            core,
            suffix,
            newlines: 0,
        }
    }

    /// The char offset of the word core, i.e. "the word's index" used as
    /// the identity key for syllable overrides and highlighting.
    ///
    /// For non-word tokens this is the same as `start`.
    pub fn core_start(&self) -> usize {
        self.start + self.prefix.chars().count()
    }

    /// Length of the raw text in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if this is a word token with a non-empty core
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word && !self.core.is_empty()
    }

    /// Check if this token is a paragraph-level break (2+ newlines)
    pub fn is_paragraph_break(&self) -> bool {
        self.kind == TokenKind::Newline && self.newlines >= 2
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)?;
        if self.kind == TokenKind::Word {
            write!(f, "/{}", self.kind.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_token_creation() {
        let token = Token::word("„".to_string(), "Hallo".to_string(), "!".to_string(), 0);
        assert_eq!(token.text, "„Hallo!");
        assert_eq!(token.core, "Hallo");
        assert_eq!(token.core_start(), 1);
        assert!(token.is_word());
    }

    #[test]
    fn test_core_start_counts_chars() {
        // Prefix with a multi-byte char still advances by one char
        let token = Token::word("»".to_string(), "Igel".to_string(), String::new(), 10);
        assert_eq!(token.core_start(), 11);
    }

    #[test]
    fn test_newline_token() {
        let mut token = Token::with_text(TokenKind::Newline, "\n\n".to_string(), 5);
        token.newlines = 2;
        assert!(token.is_paragraph_break());
        assert!(!token.is_word());
    }

    #[test]
    fn test_token_display() {
        let token = Token::word(String::new(), "Fuchs".to_string(), ".".to_string(), 4);
        assert_eq!(format!("{}", token), "Fuchs./WORD");
    }
}
