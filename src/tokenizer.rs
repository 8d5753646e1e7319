//! The offset-preserving tokenizer.
//!
//! Splits raw exercise text into Word / Space / Newline / TrailingText
//! tokens while keeping exact char offsets, so that downstream views can
//! reference any word by `(core, core_start)` and the original text can be
//! reconstructed losslessly from the token list.

use crate::char_classes::{classify, is_word_char, CharClass};
use crate::token::{Token, TokenKind};

/// Tokenize text into an offset-annotated token list.
///
/// The result is pure and deterministic; concatenating the `text` of all
/// tokens reproduces the input exactly.
///
/// # Example
/// ```
/// use lesewerk::{tokenize, TokenKind};
///
/// let tokens = tokenize("Der Fuchs.");
/// assert_eq!(tokens[0].core, "Der");
/// assert_eq!(tokens[2].core, "Fuchs");
/// assert_eq!(tokens[2].core_start(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::Space);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        if classify(chars[i]) == CharClass::Space {
            while i < chars.len() && classify(chars[i]) == CharClass::Space {
                i += 1;
            }
            tokens.push(whitespace_token(&chars[start..i], start));
        } else {
            while i < chars.len() && classify(chars[i]) != CharClass::Space {
                i += 1;
            }
            tokens.push(segment_token(&chars[start..i], start));
        }
    }

    tokens
}

/// Iterate over the word tokens of a token slice
pub fn words(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|t| t.is_word())
}

/// Build a Space or Newline token from a whitespace run
fn whitespace_token(run: &[char], start: usize) -> Token {
    let text: String = run.iter().collect();
    let newlines = run.iter().filter(|&&c| c == '\n').count();
    if newlines > 0 {
        let mut token = Token::with_text(TokenKind::Newline, text, start);
        token.newlines = newlines;
        token
    } else {
        Token::with_text(TokenKind::Space, text, start)
    }
}

/// Parse a non-whitespace segment into a Word token, or TrailingText if it
/// has no word core.
///
/// The segment grammar is prefix (non-word chars), core (word chars joined
/// by single internal hyphens), suffix (non-word chars). A segment whose
/// remainder after the core still contains word characters does not fit the
/// grammar and is passed through as TrailingText.
fn segment_token(seg: &[char], start: usize) -> Token {
    let mut i = 0;
    while i < seg.len() && !is_word_char(seg[i]) {
        i += 1;
    }
    let prefix_len = i;

    while i < seg.len() && is_word_char(seg[i]) {
        i += 1;
    }
    // Extend over single internal hyphens ("Kinder-Garten")
    while i + 1 < seg.len() && seg[i] == '-' && is_word_char(seg[i + 1]) {
        i += 1;
        while i < seg.len() && is_word_char(seg[i]) {
            i += 1;
        }
    }
    let core_end = i;

    let suffix: &[char] = &seg[core_end..];
    if core_end == prefix_len || suffix.iter().any(|&c| is_word_char(c)) {
        return Token::with_text(TokenKind::TrailingText, seg.iter().collect(), start);
    }

    Token::word(
        seg[..prefix_len].iter().collect(),
        seg[prefix_len..core_end].iter().collect(),
        suffix.iter().collect(),
        start,
    )
}
