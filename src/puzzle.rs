//! Splitting a conjugated form into puzzle parts.
//!
//! Fill-in exercises show part of a verb form and ask the child to supply
//! the rest: the personal ending for simple tenses, the auxiliary for
//! compound tenses. Deciding where to cut is the tricky part — weak verbs
//! split cleanly at the ending, but strong and modal forms like "ging" or
//! "kann" have no honest stem+ending decomposition and must stay whole.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::verbs::Tense;

/// Candidate endings, strictly longest first.
///
/// The order is load-bearing: shorter candidates are substrings of longer
/// ones ("en" is consistent with "ten"), so trying short-first would cut
/// "machten" into "macht"+"en" instead of "mach"+"ten".
const SUFFIXES: &[&str] = &[
    "test", "tet", "est", "ten", "en", "st", "te", "et", "e", "t", "n",
];

/// Weak (regular) Präteritum markers; these always split
const WEAK_PRETERITE_SUFFIXES: &[&str] = &["te", "test", "ten", "tet"];

/// Präteritum endings that also occur on strong verbs; these only split
/// when the remaining stem is long enough to still read as a stem
const STRONG_PRETERITE_SUFFIXES: &[&str] = &["en", "st", "t"];

/// Forms that are never split. Cutting an ending off these would show the
/// learner a misleading stem ("bi"+"n", "wir"+"st").
const UNSPLIT_FORMS: &[&str] = &[
    "bin", "bist", "ist", "war", "ging", "kann", "muss", "wirst", "musst",
];

/// How a conjugated form decomposes for a fill-in exercise.
///
/// `fixed_before + target + fixed_after` reconstructs the form (modulo
/// the single separating space of compound tenses). An empty `target`
/// means the form is displayed whole, with nothing to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PuzzleParts {
    /// Displayed text before the gap
    pub fixed_before: String,
    /// The part the child has to supply
    pub target: String,
    /// Displayed text after the gap
    pub fixed_after: String,
}

impl PuzzleParts {
    fn unsplit(form: &str) -> Self {
        PuzzleParts {
            fixed_before: form.to_string(),
            ..Default::default()
        }
    }

    fn ending(stem: &str, suffix: &str) -> Self {
        PuzzleParts {
            fixed_before: stem.to_string(),
            target: suffix.to_string(),
            ..Default::default()
        }
    }

    /// Whether the form is shown as one atomic unit
    pub fn is_unsplit(&self) -> bool {
        self.target.is_empty()
    }
}

/// Decide the split point of a conjugated form for the given tense.
///
/// Compound tenses split at the space, with the auxiliary as the target.
/// Simple tenses try the candidate endings longest-first and cut the
/// first one that leaves an acceptable stem. Never fails: a form nothing
/// applies to comes back unsplit.
///
/// # Example
/// ```
/// use lesewerk::{split_for_puzzle, Tense};
///
/// let parts = split_for_puzzle("machst", Tense::Praesens);
/// assert_eq!(parts.fixed_before, "mach");
/// assert_eq!(parts.target, "st");
/// ```
pub fn split_for_puzzle(conjugated: &str, tense: Tense) -> PuzzleParts {
    let form = conjugated.trim().to_lowercase();

    if tense.is_compound() {
        if let Some((aux, rest)) = form.split_once(' ') {
            return PuzzleParts {
                fixed_before: String::new(),
                target: aux.to_string(),
                fixed_after: rest.to_string(),
            };
        }
        // Malformed table data; treat like a simple present form
        warn!(form = %form, tense = tense.as_str(), "compound form without space");
    }

    split_simple(&form, tense)
}

fn split_simple(form: &str, tense: Tense) -> PuzzleParts {
    if UNSPLIT_FORMS.contains(&form) {
        return PuzzleParts::unsplit(form);
    }

    for suffix in SUFFIXES {
        let Some(stem) = form.strip_suffix(suffix) else {
            continue;
        };
        let stem_len = stem.chars().count();

        if tense == Tense::Praeteritum {
            if WEAK_PRETERITE_SUFFIXES.contains(suffix) {
                return PuzzleParts::ending(stem, suffix);
            }
            if STRONG_PRETERITE_SUFFIXES.contains(suffix) && stem_len >= 3 {
                return PuzzleParts::ending(stem, suffix);
            }
            // Stem too short (or ending not a preterite marker): this
            // candidate would mangle a strong form, try a shorter one.
        } else if stem_len >= 2 {
            return PuzzleParts::ending(stem, suffix);
        }
    }

    PuzzleParts::unsplit(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(before: &str, target: &str, after: &str) -> PuzzleParts {
        PuzzleParts {
            fixed_before: before.to_string(),
            target: target.to_string(),
            fixed_after: after.to_string(),
        }
    }

    #[test]
    fn test_praesens_weak_verb() {
        assert_eq!(
            split_for_puzzle("mache", Tense::Praesens),
            parts("mach", "e", "")
        );
        assert_eq!(
            split_for_puzzle("machst", Tense::Praesens),
            parts("mach", "st", "")
        );
        assert_eq!(
            split_for_puzzle("machen", Tense::Praesens),
            parts("mach", "en", "")
        );
    }

    #[test]
    fn test_praesens_protected_forms() {
        for form in ["kann", "bin", "ist", "muss", "wirst", "musst"] {
            let parts = split_for_puzzle(form, Tense::Praesens);
            assert!(parts.is_unsplit(), "{form} must stay whole: {parts:?}");
            assert_eq!(parts.fixed_before, form);
        }
    }

    #[test]
    fn test_praesens_modal_with_ending_splits() {
        assert_eq!(
            split_for_puzzle("kannst", Tense::Praesens),
            parts("kann", "st", "")
        );
        assert_eq!(
            split_for_puzzle("willst", Tense::Praesens),
            parts("will", "st", "")
        );
    }

    #[test]
    fn test_longest_suffix_wins() {
        // "machtest" must cut at "test", not "st" or "t"
        assert_eq!(
            split_for_puzzle("machtest", Tense::Praeteritum),
            parts("mach", "test", "")
        );
        assert_eq!(
            split_for_puzzle("machten", Tense::Praeteritum),
            parts("mach", "ten", "")
        );
    }

    #[test]
    fn test_praeteritum_strong_verb() {
        // Long enough stem: split
        assert_eq!(
            split_for_puzzle("gingen", Tense::Praeteritum),
            parts("ging", "en", "")
        );
        // "ging" matches no candidate ending at all: unsplit
        assert_eq!(
            split_for_puzzle("ging", Tense::Praeteritum),
            parts("ging", "", "")
        );
    }

    #[test]
    fn test_praeteritum_short_stem_protected() {
        // "aßen": "en" leaves "aß" (2 chars < 3), "n" is not a preterite
        // marker, so the form stays whole
        let p = split_for_puzzle("aßen", Tense::Praeteritum);
        assert!(p.is_unsplit(), "{p:?}");
    }

    #[test]
    fn test_compound_tense_splits_at_space() {
        assert_eq!(
            split_for_puzzle("habe gemacht", Tense::Perfekt),
            parts("", "habe", "gemacht")
        );
        assert_eq!(
            split_for_puzzle("hatte gelesen", Tense::Plusquamperfekt),
            parts("", "hatte", "gelesen")
        );
        assert_eq!(
            split_for_puzzle("werden laufen", Tense::Futur1),
            parts("", "werden", "laufen")
        );
    }

    #[test]
    fn test_malformed_compound_falls_back() {
        // No space: falls through to the simple-tense logic
        assert_eq!(
            split_for_puzzle("gemacht", Tense::Perfekt),
            parts("gemach", "t", "")
        );
    }

    #[test]
    fn test_input_is_normalized() {
        assert_eq!(
            split_for_puzzle("  Machst ", Tense::Praesens),
            parts("mach", "st", "")
        );
    }

    #[test]
    fn test_reconstruction() {
        for (form, tense) in [
            ("mache", Tense::Praesens),
            ("gingen", Tense::Praeteritum),
            ("kann", Tense::Praesens),
            ("musste", Tense::Praeteritum),
        ] {
            let p = split_for_puzzle(form, tense);
            assert_eq!(format!("{}{}{}", p.fixed_before, p.target, p.fixed_after), form);
        }
    }

    #[test]
    fn test_never_empty_output() {
        for form in ["", "x", "äh"] {
            let p = split_for_puzzle(form, Tense::Praesens);
            assert_eq!(
                format!("{}{}{}", p.fixed_before, p.target, p.fixed_after),
                form.trim().to_lowercase()
            );
        }
    }
}
