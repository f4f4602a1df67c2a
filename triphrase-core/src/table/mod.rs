//! Phrase frequency table and ranking.
//!
//! The table maps each phrase to its occurrence count and only ever grows:
//! there is no removal and no capacity bound. Memory is proportional to the
//! number of distinct phrases in one input, which is the accepted price of
//! exact counts.
//!
//! Threading:
//! - A [`PhraseTable`] belongs to a single input and is never shared.

mod rank;
mod stats;
mod types;

pub use stats::TableStats;
pub use types::PhraseTable;
