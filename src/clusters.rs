//! Letter-cluster segmentation.
//!
//! Several exercises let a child tap letters or letter groups to color
//! them. A tap should select a whole digraph like "sch" or "ei" in one go,
//! so words are pre-segmented into chunks: either single characters or
//! configured multi-letter clusters. "st" and "sp" are only treated as a
//! cluster at a syllable start ("Stuhl", "ver-sprechen") — inside a
//! syllable ("ist", "Wespe") they stay separate letters.

use std::collections::HashSet;

/// Clusters that only apply at a syllable start
const SYLLABLE_START_ONLY: &[&str] = &["st", "sp"];

/// The default cluster set shipped with the app settings
const DEFAULT_CLUSTERS: &[&str] = &[
    "sch", "ch", "ck", "ph", "pf", "th", "qu", "ng", "ei", "ie", "eu", "au", "äu", "ai", "sp",
    "st",
];

/// A user-configurable set of letter clusters.
///
/// Stored lowercase, deduplicated, longest-first so that overlapping
/// clusters ("sch" vs "ch"/"st") resolve to the longest match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTable {
    clusters: Vec<String>,
}

impl Default for ClusterTable {
    fn default() -> Self {
        ClusterTable::new(DEFAULT_CLUSTERS.iter().copied())
    }
}

impl ClusterTable {
    /// Build a table from any collection of cluster strings
    pub fn new<I, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut clusters: Vec<String> = clusters
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        // Longest first; ties keep insertion order
        clusters.sort_by_key(|c| std::cmp::Reverse(c.chars().count()));
        ClusterTable { clusters }
    }

    /// Number of configured clusters
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The clusters, longest first
    pub fn clusters(&self) -> &[String] {
        &self.clusters
    }

    /// Find the longest cluster matching at `pos` in `lower` (a per-char
    /// lowercased view of the text). Clusters restricted to syllable
    /// starts are skipped when `pos` is not one.
    fn match_at(&self, lower: &[char], pos: usize, syllable_starts: &HashSet<usize>) -> Option<usize> {
        for cluster in &self.clusters {
            let len = cluster.chars().count();
            if pos + len > lower.len() {
                continue;
            }
            if !cluster.chars().zip(&lower[pos..pos + len]).all(|(a, &b)| a == b) {
                continue;
            }
            if SYLLABLE_START_ONLY.contains(&cluster.as_str()) && !syllable_starts.contains(&pos) {
                continue;
            }
            return Some(len);
        }
        None
    }
}

/// Segment text into selectable chunks.
///
/// With clustering disabled every character is its own chunk. Otherwise a
/// left-to-right scan emits the longest matching cluster at each position,
/// or a single character when none matches. Chunks cover the text exactly.
///
/// `syllable_starts` holds the char offsets at which a syllable begins
/// (see [`crate::syllabifier::syllable_start_offsets`]); it gates the
/// st/sp clusters.
pub fn segment_chunks(
    text: &str,
    clusters_enabled: bool,
    table: &ClusterTable,
    syllable_starts: &HashSet<usize>,
) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if !clusters_enabled {
        return chars.iter().map(|c| c.to_string()).collect();
    }

    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut chunks = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match table.match_at(&lower, i, syllable_starts) {
            Some(len) => {
                chunks.push(chars[i..i + len].iter().collect());
                i += len;
            }
            None => {
                chunks.push(chars[i].to_string());
                i += 1;
            }
        }
    }
    chunks
}
