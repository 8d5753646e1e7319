//! Syllabification with manual overrides and memoization.
//!
//! Syllables drive most exercises (syllable arcs, word building, swing
//! puzzles). Automatic hyphenation is good but not perfect for a reading
//! classroom, so a teacher correction — keyed by the word and its position
//! in the text — always wins over the algorithm. Automatic results are
//! memoized per distinct word for the lifetime of the session; documents
//! are small enough that nothing is ever evicted.

use std::collections::{HashMap, HashSet};

use hypher::{hyphenate, Lang};
use tracing::{debug, warn};

/// A pluggable hyphenation source.
///
/// The host injects this; the bundled default is [`GermanHyphenator`].
/// Implementations must only insert break points, never alter characters.
pub trait HyphenationBackend {
    /// Split a word into syllables. An empty result is treated as
    /// "backend could not handle this word".
    fn hyphenate(&self, word: &str) -> Vec<String>;
}

/// Hyphenation backed by the `hypher` German pattern set
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHyphenator;

impl HyphenationBackend for GermanHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        hyphenate(word, Lang::German).map(str::to_string).collect()
    }
}

/// Build the override key for a word core at a text position.
///
/// The position is part of the key because the same word can occur at
/// several places with independent corrections.
pub fn override_key(core: &str, core_start: usize) -> String {
    format!("{}_{}", core.to_lowercase(), core_start)
}

/// Syllabifier with override table, memo cache, and optional backend
#[derive(Default)]
pub struct Syllabifier {
    backend: Option<Box<dyn HyphenationBackend>>,
    overrides: HashMap<String, Vec<String>>,
    memo: HashMap<String, Vec<String>>,
}

impl Syllabifier {
    /// Create a syllabifier with no backend installed.
    ///
    /// Until a backend arrives every word syllabifies to itself; once
    /// `set_backend` is called, subsequent calls use the backend (results
    /// from the backend-less period are not cached).
    pub fn new() -> Self {
        Syllabifier::default()
    }

    /// Create a syllabifier with the given backend
    pub fn with_backend(backend: Box<dyn HyphenationBackend>) -> Self {
        Syllabifier {
            backend: Some(backend),
            ..Default::default()
        }
    }

    /// Create a syllabifier with the bundled German hyphenator
    pub fn german() -> Self {
        Syllabifier::with_backend(Box::new(GermanHyphenator))
    }

    /// Install or replace the hyphenation backend
    pub fn set_backend(&mut self, backend: Box<dyn HyphenationBackend>) {
        self.backend = Some(backend);
    }

    /// Record a manual correction for the word core at `core_start`
    pub fn set_override(&mut self, core: &str, core_start: usize, syllables: Vec<String>) {
        self.overrides.insert(override_key(core, core_start), syllables);
    }

    /// Remove a manual correction
    pub fn clear_override(&mut self, core: &str, core_start: usize) {
        self.overrides.remove(&override_key(core, core_start));
    }

    /// Import a full override table (e.g. restored from the host's settings)
    pub fn set_overrides(&mut self, overrides: HashMap<String, Vec<String>>) {
        self.overrides = overrides;
    }

    /// Syllabify a word core located at `core_start` in the text.
    ///
    /// Resolution order: manual override, memo cache, backend. The result
    /// is always non-empty and concatenates back to `core` exactly; when
    /// the backend is missing or misbehaves the whole word is returned as
    /// a single syllable.
    pub fn syllabify(&mut self, core: &str, core_start: usize) -> Vec<String> {
        if let Some(syls) = self.overrides.get(&override_key(core, core_start)) {
            return syls.clone();
        }

        let memo_key = core.to_lowercase();
        if let Some(syls) = self.memo.get(&memo_key) {
            return syls.clone();
        }

        let Some(backend) = &self.backend else {
            debug!(word = core, "no hyphenation backend, single-syllable fallback");
            return vec![core.to_string()];
        };

        let mut syls = backend.hyphenate(core);
        if syls.is_empty() || syls.concat() != core {
            warn!(word = core, "hyphenation violated concatenation law");
            syls = vec![core.to_string()];
        }
        self.memo.insert(memo_key, syls.clone());
        syls
    }
}

/// Char offsets (relative to the word) at which a syllable begins.
///
/// This feeds the st/sp positional rule of the cluster segmenter.
pub fn syllable_start_offsets(syllables: &[String]) -> HashSet<usize> {
    let mut offsets = HashSet::new();
    let mut pos = 0;
    for syl in syllables {
        offsets.insert(pos);
        pos += syl.chars().count();
    }
    offsets
}
