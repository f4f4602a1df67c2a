//! Top-N ranking.

use core::cmp::Ordering;

use crate::table::types::PhraseTable;
use triphrase_types::{Count, Phrase, RankedPhrase};

/// Count descending, then phrase ascending.
#[inline(always)]
fn rank_order(a: &(&Phrase, Count), b: &(&Phrase, Count)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl PhraseTable {
    /// Returns the `limit` most frequent phrases.
    ///
    /// Entries are ordered by count descending; equal counts are ordered by
    /// phrase ascending so the result does not depend on hash order. An empty
    /// table or a zero limit yields an empty result.
    pub fn rank(&self, limit: usize) -> Vec<RankedPhrase> {
        if limit == 0 || self.counts.is_empty() {
            return Vec::new();
        }

        let mut entries: Vec<(&Phrase, Count)> = self.iter().collect();

        // Partition first so only the kept entries are fully sorted.
        if entries.len() > limit {
            entries.select_nth_unstable_by(limit - 1, rank_order);
            entries.truncate(limit);
        }
        entries.sort_unstable_by(rank_order);

        log::debug!(
            "ranked {} of {} distinct phrases",
            entries.len(),
            self.counts.len()
        );

        entries
            .into_iter()
            .map(|(phrase, count)| RankedPhrase::new(phrase.clone(), count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, Count)]) -> PhraseTable {
        let mut table = PhraseTable::new();
        for &(text, count) in rows {
            let words: Vec<&str> = text.split(' ').collect();
            for _ in 0..count {
                table.increment(Phrase::from_tokens(words[0], words[1], words[2]));
            }
        }
        table
    }

    fn rows(ranked: &[RankedPhrase]) -> Vec<(&str, Count)> {
        ranked.iter().map(|r| (r.phrase.as_str(), r.count)).collect()
    }

    #[test]
    fn empty_table_ranks_empty() {
        assert!(PhraseTable::new().rank(100).is_empty());
    }

    #[test]
    fn zero_limit_ranks_empty() {
        assert!(table(&[("a b c", 1)]).rank(0).is_empty());
    }

    #[test]
    fn ties_ordered_by_phrase() {
        let t = table(&[("d e f", 5), ("g h i", 3), ("a b c", 5)]);

        assert_eq!(rows(&t.rank(2)), [("a b c", 5), ("d e f", 5)]);
        assert_eq!(
            rows(&t.rank(3)),
            [("a b c", 5), ("d e f", 5), ("g h i", 3)]
        );
    }

    #[test]
    fn lower_count_only_when_room() {
        let t = table(&[("a b c", 5), ("d e f", 5), ("g h i", 3)]);
        assert!(t.rank(2).iter().all(|r| r.phrase.as_str() != "g h i"));
    }

    #[test]
    fn limit_larger_than_table() {
        let t = table(&[("a b c", 1), ("b c d", 2)]);
        assert_eq!(rows(&t.rank(100)), [("b c d", 2), ("a b c", 1)]);
    }

    #[test]
    fn truncates_to_limit() {
        let mut t = PhraseTable::new();
        for i in 0..250u64 {
            let word = format!("w{i:03}");
            for _ in 0..(i % 7 + 1) {
                t.increment(Phrase::from_tokens(&word, "x", "y"));
            }
        }

        let ranked = t.rank(100);
        assert_eq!(ranked.len(), 100);

        // Matches a full sort of every entry.
        let mut all: Vec<RankedPhrase> = t
            .iter()
            .map(|(p, c)| RankedPhrase::new(p.clone(), c))
            .collect();
        all.sort_unstable_by(|a, b| b.cmp(a));
        all.truncate(100);
        assert_eq!(ranked, all);
    }

    #[test]
    fn result_is_sorted_descending() {
        let t = table(&[("a b c", 2), ("b c d", 9), ("c d e", 2), ("d e f", 4)]);
        let ranked = t.rank(10);
        for w in ranked.windows(2) {
            assert!(w[0] > w[1], "ranking must be strictly descending");
        }
    }
}
