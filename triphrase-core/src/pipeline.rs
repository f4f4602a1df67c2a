//! Per-input counting engine.
//!
//! [`PhraseCounter`] drives one input through tokenizer, window and table,
//! then ranks the result. The read strategy comes from [`CountConfig::mode`]
//! and is chosen per counter, so two counters with different modes can run
//! side by side (which is how the mode equivalence tests work).
//!
//! | Mode          | Memory                      | Reads          |
//! |---------------|-----------------------------|----------------|
//! | `Streaming`   | one line + two carried words | line by line   |
//! | `WholeBuffer` | the whole input             | once, up front |
//!
//! Both modes produce identical tables for the same text.

use std::io::BufRead;

use triphrase_types::{CountConfig, InputError, Mode, RankedPhrase, Source};

use crate::analyzer::{count_slice, PhraseWindow, Tokenizer};
use crate::input::{open_source, read_whole, LineReader};
use crate::table::{PhraseTable, TableStats};

/// Counting outcome for one input.
#[derive(Debug, Clone)]
pub struct Report {
    /// Source label: `StdIn` or the file path.
    pub label: String,
    /// Top phrases, best first.
    pub ranked: Vec<RankedPhrase>,
    /// Counting statistics.
    pub stats: TableStats,
}

impl Report {
    /// Returns true if the input held no phrase at all.
    ///
    /// This looks at the table, not at `ranked`, so a zero limit on a
    /// non-empty input is not mistaken for "no phrases".
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stats.distinct == 0
    }
}

/// Counts three-word phrases in one input at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseCounter {
    config: CountConfig,
    tokenizer: Tokenizer,
}

impl PhraseCounter {
    /// Creates a counter with the given configuration.
    pub fn new(config: CountConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(config.word_class),
        }
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Counts every phrase in `reader` using the configured mode.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Read` if reading fails. No partial table is
    /// returned in that case.
    pub fn count<R: BufRead>(&self, reader: R) -> Result<PhraseTable, InputError> {
        match self.config.mode {
            Mode::Streaming => self.count_streaming(reader),
            Mode::WholeBuffer => self.count_whole(reader),
        }
    }

    /// Line-by-line counting.
    ///
    /// Blank lines are skipped without resetting the carried words, so a
    /// phrase may span any number of line breaks.
    pub fn count_streaming<R: BufRead>(&self, reader: R) -> Result<PhraseTable, InputError> {
        let mut lines = LineReader::new(reader);
        let mut table = PhraseTable::new();
        let mut window = PhraseWindow::new();
        let mut line = String::new();

        while lines.read_line_into(&mut line)? {
            if line.trim().is_empty() {
                continue;
            }
            window.extend(self.tokenizer.tokens(&line), &mut table);
        }

        log::debug!(
            "streamed {} lines, {} tokens, {} carried at end",
            lines.lines_read(),
            window.tokens_seen(),
            window.pending().len()
        );
        Ok(table)
    }

    /// Whole-buffer counting.
    pub fn count_whole<R: BufRead>(&self, reader: R) -> Result<PhraseTable, InputError> {
        let text = read_whole(reader)?;
        let tokens = self.tokenizer.collect(&text);

        let mut table = PhraseTable::new();
        count_slice(&tokens, &mut table);

        log::debug!("buffered {} bytes, {} tokens", text.len(), tokens.len());
        Ok(table)
    }

    /// Counts and ranks `reader`, labelling the report with `label`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Read` if reading fails.
    pub fn report<R: BufRead>(&self, reader: R, label: &str) -> Result<Report, InputError> {
        let table = self.count(reader)?;
        let stats = table.stats();
        let ranked = table.rank(self.config.limit);

        log::info!("{label}: {stats} ({} mode)", self.config.mode);
        Ok(Report {
            label: label.to_owned(),
            ranked,
            stats,
        })
    }

    /// Opens `source`, then counts and ranks it.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Open` if the source cannot be opened and
    /// `InputError::Read` if reading fails.
    pub fn process(&self, source: &Source) -> Result<Report, InputError> {
        let reader = open_source(source)?;
        self.report(reader, &source.label())
    }
}
