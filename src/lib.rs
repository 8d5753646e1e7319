//! # lesewerk
//!
//! German word segmentation and morphological matching for literacy
//! exercises. The crate is the text-analysis core behind an authoring
//! tool: a teacher pastes a text, and the engine turns it into material
//! for syllable puzzles, letter-cluster marking, and verb drills.
//!
//! Three independent pipelines share one offset model:
//!
//! - text → [`tokenize`] → offset-annotated word tokens
//! - word core → [`Syllabifier`] → syllables (teacher corrections win)
//! - surface form → [`ReverseIndex`] → lemma → [`VerbTable`] →
//!   [`split_for_puzzle`] → fill-in puzzle parts
//!
//! ## Quick Start
//!
//! ```rust
//! use lesewerk::{tokenize, words, Syllabifier};
//!
//! let tokens = tokenize("Der Fuchs läuft über die Wiese.");
//! let mut syllabifier = Syllabifier::german();
//!
//! for word in words(&tokens) {
//!     let syls = syllabifier.syllabify(&word.core, word.core_start());
//!     assert_eq!(syls.concat(), word.core);
//! }
//! ```
//!
//! ## Verb puzzles
//!
//! ```rust
//! use lesewerk::{ReverseIndex, Tense, split_for_puzzle};
//!
//! let index = ReverseIndex::bundled();
//! assert_eq!(index.find_lemma("gemacht"), Some("machen"));
//!
//! let forms = index.table().get_conjugation("machen", Tense::Praesens).unwrap();
//! assert_eq!(forms[&lesewerk::Person::Du], "machst");
//!
//! let parts = split_for_puzzle("machst", Tense::Praesens);
//! assert_eq!((parts.fixed_before.as_str(), parts.target.as_str()), ("mach", "st"));
//! ```
//!
//! All analysis is best-effort: unknown verbs, unsplittable forms, and a
//! missing hyphenation backend resolve to defined fallback values, never
//! to errors.

pub mod char_classes;
pub mod clusters;
pub mod lookup;
pub mod puzzle;
pub mod syllabifier;
pub mod token;
pub mod tokenizer;
pub mod verbs;

// Re-export main types for convenience
pub use char_classes::{classify, is_word_char, CharClass};
pub use clusters::{segment_chunks, ClusterTable};
pub use lookup::{FormMatch, ReverseIndex};
pub use puzzle::{split_for_puzzle, PuzzleParts};
pub use syllabifier::{
    override_key, syllable_start_offsets, GermanHyphenator, HyphenationBackend, Syllabifier,
};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, words};
pub use verbs::{Person, Tense, VerbTable};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
