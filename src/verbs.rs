//! The verb conjugation database.
//!
//! A bundled table maps each lemma (infinitive) to its conjugated forms
//! across 5 tenses and 6 persons. The table is pure data, shipped as a
//! JSON asset and parsed once on first use; the matching logic lives in
//! [`crate::lookup`] and [`crate::puzzle`].

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::error;

/// The five tenses covered by the exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    /// Present
    #[serde(rename = "praesens")]
    Praesens,
    /// Simple past
    #[serde(rename = "praeteritum")]
    Praeteritum,
    /// Present perfect (auxiliary + participle)
    #[serde(rename = "perfekt")]
    Perfekt,
    /// Past perfect (auxiliary + participle)
    #[serde(rename = "plusquamperfekt")]
    Plusquamperfekt,
    /// Future (werden + infinitive)
    #[serde(rename = "futur1")]
    Futur1,
}

impl Tense {
    /// All tenses in declaration order.
    ///
    /// Index construction iterates this array, which makes first-writer-wins
    /// rules deterministic.
    pub const ALL: [Tense; 5] = [
        Tense::Praesens,
        Tense::Praeteritum,
        Tense::Perfekt,
        Tense::Plusquamperfekt,
        Tense::Futur1,
    ];

    /// Compound tenses store two-word forms ("habe gemacht")
    pub fn is_compound(&self) -> bool {
        matches!(self, Tense::Perfekt | Tense::Plusquamperfekt | Tense::Futur1)
    }

    /// Display name as shown to teachers
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Praesens => "Präsens",
            Tense::Praeteritum => "Präteritum",
            Tense::Perfekt => "Perfekt",
            Tense::Plusquamperfekt => "Plusquamperfekt",
            Tense::Futur1 => "Futur I",
        }
    }
}

/// The six grammatical persons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    /// 1st singular
    #[serde(rename = "ich")]
    Ich,
    /// 2nd singular
    #[serde(rename = "du")]
    Du,
    /// 3rd singular
    #[serde(rename = "er_sie_es")]
    ErSieEs,
    /// 1st plural
    #[serde(rename = "wir")]
    Wir,
    /// 2nd plural
    #[serde(rename = "ihr")]
    Ihr,
    /// 3rd plural / formal address
    #[serde(rename = "sie_Sie")]
    SieSie,
}

impl Person {
    /// All persons in declaration order
    pub const ALL: [Person; 6] = [
        Person::Ich,
        Person::Du,
        Person::ErSieEs,
        Person::Wir,
        Person::Ihr,
        Person::SieSie,
    ];

    /// Display pronoun
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::Ich => "ich",
            Person::Du => "du",
            Person::ErSieEs => "er/sie/es",
            Person::Wir => "wir",
            Person::Ihr => "ihr",
            Person::SieSie => "sie/Sie",
        }
    }
}

/// Conjugated forms of one tense, keyed by person
pub type Forms = HashMap<Person, String>;

/// All conjugations of one lemma, keyed by tense
pub type VerbEntry = HashMap<Tense, Forms>;

/// The verb database: lemma → tense → person → surface form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbTable {
    verbs: HashMap<String, VerbEntry>,
}

/// Embedded conjugation table
static VERBS_JSON: &str = include_str!("data/verbs.json");

static BUNDLED: Lazy<Arc<VerbTable>> = Lazy::new(|| {
    let table = serde_json::from_str(VERBS_JSON).unwrap_or_else(|e| {
        error!(error = %e, "bundled verb table failed to parse");
        VerbTable::default()
    });
    Arc::new(table)
});

impl VerbTable {
    /// The bundled database shipped with the crate
    pub fn bundled() -> Arc<VerbTable> {
        Arc::clone(&BUNDLED)
    }

    /// Build a table from explicit entries (mainly for tests and tools)
    pub fn from_entries(verbs: HashMap<String, VerbEntry>) -> Self {
        VerbTable { verbs }
    }

    /// Number of lemmas
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Whether a lemma is present (case-insensitive)
    pub fn contains(&self, lemma: &str) -> bool {
        self.verbs.contains_key(&lemma.to_lowercase())
    }

    /// All lemmas, sorted (stable order for exercise authoring lists and
    /// for reverse-index construction)
    pub fn lemmas(&self) -> Vec<&str> {
        let mut lemmas: Vec<&str> = self.verbs.keys().map(String::as_str).collect();
        lemmas.sort_unstable();
        lemmas
    }

    /// All conjugations of a lemma
    pub fn entry(&self, lemma: &str) -> Option<&VerbEntry> {
        self.verbs.get(&lemma.to_lowercase())
    }

    /// The person → form map for a lemma and tense.
    ///
    /// Returns `None` when the lemma or tense is absent; callers skip the
    /// exercise item in that case.
    pub fn get_conjugation(&self, lemma: &str, tense: Tense) -> Option<&Forms> {
        self.entry(lemma).and_then(|entry| entry.get(&tense))
    }

    /// One conjugated form
    pub fn form(&self, lemma: &str, tense: Tense, person: Person) -> Option<&str> {
        self.get_conjugation(lemma, tense)
            .and_then(|forms| forms.get(&person))
            .map(String::as_str)
    }
}
