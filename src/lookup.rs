//! Reverse lookup from a conjugated surface form to its lemma.
//!
//! Exercise generation walks the tokenized text and asks, for every word,
//! "is this a form of a verb we know?". The index answering that question
//! is built once, lazily, from the conjugation table. Matching is
//! heuristic by design: an unrecognized form is a normal outcome and the
//! word is simply not offered as a verb exercise.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use unicode_normalization::UnicodeNormalization;

use crate::verbs::{Person, Tense, VerbTable};

/// A resolved surface form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMatch {
    /// The infinitive the form belongs to
    pub lemma: String,
    /// The tense the form was indexed under
    pub tense: Tense,
}

/// Lazily built index from lowercased surface form to lemma and tense.
///
/// Construct one per application (or per test); the build runs at most
/// once and `ensure_built` is safe to call from any number of call sites.
pub struct ReverseIndex {
    table: Arc<VerbTable>,
    index: OnceCell<HashMap<String, FormMatch>>,
}

impl ReverseIndex {
    /// Create an index over the given table (not built yet)
    pub fn new(table: Arc<VerbTable>) -> Self {
        ReverseIndex {
            table,
            index: OnceCell::new(),
        }
    }

    /// Create an index over the bundled verb database
    pub fn bundled() -> Self {
        ReverseIndex::new(VerbTable::bundled())
    }

    /// The underlying conjugation table
    pub fn table(&self) -> &Arc<VerbTable> {
        &self.table
    }

    /// Build the index if it has not been built yet. Idempotent.
    pub fn ensure_built(&self) -> &HashMap<String, FormMatch> {
        self.index.get_or_init(|| build_index(&self.table))
    }

    /// Resolve a surface form to its lemma and tense.
    ///
    /// Tries the exact (NFC, lowercased, trimmed) form first, then once
    /// with a trailing "st" stripped, covering 2nd-person forms the table
    /// never saw. Returns `None` for anything unrecognized.
    pub fn find(&self, surface: &str) -> Option<&FormMatch> {
        let index = self.ensure_built();
        let key = normalize(surface);

        if let Some(m) = index.get(&key) {
            return Some(m);
        }
        if let Some(stripped) = key.strip_suffix("st") {
            return index.get(stripped);
        }
        None
    }

    /// Resolve a surface form to its lemma
    pub fn find_lemma(&self, surface: &str) -> Option<&str> {
        self.find(surface).map(|m| m.lemma.as_str())
    }
}

/// Normalize a surface form for index keys: NFC, trimmed, lowercased
fn normalize(form: &str) -> String {
    form.trim().nfc().collect::<String>().to_lowercase()
}

/// Build the index. Lemmas are iterated in sorted order and tenses and
/// persons in declaration order, so every first-writer-wins decision is
/// deterministic across runs.
fn build_index(table: &VerbTable) -> HashMap<String, FormMatch> {
    fn claim(index: &mut HashMap<String, FormMatch>, key: String, lemma: &str, tense: Tense) {
        index.entry(key).or_insert_with(|| FormMatch {
            lemma: lemma.to_string(),
            tense,
        });
    }

    let mut index: HashMap<String, FormMatch> = HashMap::new();

    for lemma in table.lemmas() {
        for tense in Tense::ALL {
            let Some(forms) = table.get_conjugation(lemma, tense) else {
                continue;
            };
            for person in Person::ALL {
                let Some(form) = forms.get(&person) else {
                    continue;
                };
                let key = normalize(form);
                claim(&mut index, key.clone(), lemma, tense);

                // For compound forms, also index the salient final word
                // ("gemacht" out of "habe gemacht") so bare participles in
                // running text still resolve. Short fragments are too
                // ambiguous to claim.
                if tense.is_compound() {
                    if let Some(fragment) = key.rsplit(' ').next() {
                        if fragment.chars().count() > 3 {
                            claim(&mut index, fragment.to_string(), lemma, tense);
                        }
                    }
                }
            }
        }
    }

    // Every lemma resolves to itself
    for lemma in table.lemmas() {
        claim(&mut index, lemma.to_lowercase(), lemma, Tense::Praesens);
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as Map;

    #[test]
    fn test_participle_resolves() {
        let index = ReverseIndex::bundled();
        let m = index.find("gemacht").unwrap();
        assert_eq!(m.lemma, "machen");
        assert_eq!(m.tense, Tense::Perfekt);
    }

    #[test]
    fn test_perfekt_wins_over_plusquamperfekt() {
        // "gegangen" occurs in both compound past tenses; the first
        // writer (Perfekt) keeps the mapping.
        let index = ReverseIndex::bundled();
        assert_eq!(index.find("gegangen").unwrap().tense, Tense::Perfekt);
    }

    #[test]
    fn test_simple_forms_resolve() {
        let index = ReverseIndex::bundled();
        assert_eq!(index.find_lemma("musst"), Some("müssen"));
        assert_eq!(index.find_lemma("ging"), Some("gehen"));
        assert_eq!(index.find_lemma("wirst"), Some("werden"));
        assert_eq!(index.find_lemma("Liest"), Some("lesen"));
    }

    #[test]
    fn test_lemma_resolves_to_itself() {
        let index = ReverseIndex::bundled();
        assert_eq!(index.find_lemma("machen"), Some("machen"));
        assert_eq!(index.find_lemma("sein"), Some("sein"));
    }

    #[test]
    fn test_st_stripping_fallback() {
        // Konjunktiv "machest" is not in the table; stripping "st" leaves
        // "mache", which is.
        let index = ReverseIndex::bundled();
        assert_eq!(index.find_lemma("machest"), Some("machen"));
    }

    #[test]
    fn test_unknown_form() {
        let index = ReverseIndex::bundled();
        assert_eq!(index.find_lemma("xyzabc"), None);
        assert_eq!(index.find_lemma(""), None);
    }

    #[test]
    fn test_decomposed_umlaut_matches() {
        // "müsst" with u + combining diaeresis
        let index = ReverseIndex::bundled();
        assert_eq!(index.find_lemma("mu\u{0308}sst"), Some("müssen"));
    }

    #[test]
    fn test_full_compound_form_resolves() {
        let index = ReverseIndex::bundled();
        let m = index.find("habe gemacht").unwrap();
        assert_eq!(m.lemma, "machen");
        assert_eq!(m.tense, Tense::Perfekt);
    }

    #[test]
    fn test_ensure_built_is_idempotent() {
        let index = ReverseIndex::bundled();
        let first = index.ensure_built().len();
        index.find("gemacht");
        assert_eq!(index.ensure_built().len(), first);
    }

    #[test]
    fn test_short_fragment_not_claimed() {
        // A 3-char compound fragment must not enter the index
        let mut forms = Map::new();
        forms.insert(Person::Ich, "habe tan".to_string());
        forms.insert(Person::Du, "hast tan".to_string());
        forms.insert(Person::ErSieEs, "hat tan".to_string());
        forms.insert(Person::Wir, "haben tan".to_string());
        forms.insert(Person::Ihr, "habt tan".to_string());
        forms.insert(Person::SieSie, "haben tan".to_string());

        let mut entry = Map::new();
        entry.insert(Tense::Perfekt, forms);
        let mut verbs = Map::new();
        verbs.insert("tun".to_string(), entry);

        let index = ReverseIndex::new(Arc::new(VerbTable::from_entries(verbs)));
        assert_eq!(index.find_lemma("tan"), None);
        assert!(index.find("habe tan").is_some());
    }
}
