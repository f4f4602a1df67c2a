//! Frequency table type.

use rustc_hash::FxHashMap;
use triphrase_types::{Count, Phrase};

use crate::analyzer::PhraseSink;

/// Exact phrase occurrence counts for one input.
///
/// Every phrase present has a count of at least one; a phrase that is absent
/// counts as zero.
#[derive(Debug, Default, Clone)]
pub struct PhraseTable {
    pub(crate) counts: FxHashMap<Phrase, Count>,
    /// Sum of all counts, kept alongside to avoid a pass over the map.
    pub(crate) total: Count,
    /// Words fed through the window, including ones that never completed a phrase.
    pub(crate) tokens: u64,
}

impl PhraseTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `phrase`.
    #[inline]
    pub fn increment(&mut self, phrase: Phrase) {
        *self.counts.entry(phrase).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count of `phrase`, zero if it never occurred.
    #[inline]
    pub fn get(&self, phrase: &str) -> Count {
        self.counts.get(phrase).copied().unwrap_or(0)
    }

    /// Number of distinct phrases.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no phrase has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of phrase occurrences counted (the sum of all counts).
    #[inline]
    pub fn total_phrases(&self) -> Count {
        self.total
    }

    /// Number of words that fed this table.
    #[inline]
    pub fn tokens_seen(&self) -> u64 {
        self.tokens
    }

    /// Iterates over `(phrase, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Phrase, Count)> {
        self.counts.iter().map(|(p, &c)| (p, c))
    }
}

impl PhraseSink for PhraseTable {
    #[inline]
    fn record(&mut self, phrase: Phrase) {
        self.increment(phrase);
    }

    #[inline]
    fn note_tokens(&mut self, n: u64) {
        self.tokens += n;
    }
}

impl FromIterator<Phrase> for PhraseTable {
    fn from_iter<I: IntoIterator<Item = Phrase>>(iter: I) -> Self {
        let mut table = Self::new();
        for phrase in iter {
            table.increment(phrase);
        }
        table
    }
}

impl Extend<Phrase> for PhraseTable {
    fn extend<I: IntoIterator<Item = Phrase>>(&mut self, iter: I) {
        for phrase in iter {
            self.increment(phrase);
        }
    }
}
