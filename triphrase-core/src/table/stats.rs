//! Statistics and TableStats.

use crate::table::types::PhraseTable;
use triphrase_types::Count;

/// A snapshot of counting statistics for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Number of words the tokenizer produced.
    pub tokens: u64,
    /// Number of phrase occurrences counted.
    pub phrases: Count,
    /// Number of distinct phrases.
    pub distinct: usize,
    /// Bytes held by phrase text, excluding map overhead.
    pub phrase_bytes: usize,
}

impl PhraseTable {
    /// Returns statistics for this table.
    pub fn stats(&self) -> TableStats {
        TableStats {
            tokens: self.tokens,
            phrases: self.total,
            distinct: self.counts.len(),
            phrase_bytes: self.counts.keys().map(|p| p.as_str().len()).sum(),
        }
    }
}

impl TableStats {
    /// Returns approximate memory usage of the table in bytes.
    pub fn memory_usage_bytes(&self) -> usize {
        let entry = std::mem::size_of::<String>() + std::mem::size_of::<Count>();
        self.distinct * entry + self.phrase_bytes
    }
}

impl core::fmt::Display for TableStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} phrases, {} distinct",
            self.tokens, self.phrases, self.distinct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triphrase_types::Phrase;

    #[test]
    fn empty_stats() {
        let stats = PhraseTable::new().stats();
        assert_eq!(stats.phrases, 0);
        assert_eq!(stats.distinct, 0);
        assert_eq!(stats.memory_usage_bytes(), 0);
        assert_eq!(format!("{stats}"), "0 tokens, 0 phrases, 0 distinct");
    }

    #[test]
    fn memory_grows_with_distinct_phrases() {
        let mut table = PhraseTable::new();
        table.increment(Phrase::from_tokens("a", "b", "c"));
        let one = table.stats().memory_usage_bytes();

        table.increment(Phrase::from_tokens("a", "b", "c"));
        assert_eq!(table.stats().memory_usage_bytes(), one);

        table.increment(Phrase::from_tokens("b", "c", "d"));
        assert!(table.stats().memory_usage_bytes() > one);
        assert_eq!(table.stats().phrase_bytes, 10);
    }
}
