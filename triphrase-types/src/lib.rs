//! Core types shared across the triphrase crates.
//!
//! This crate holds the plain data that flows between the counting core and
//! the command line front end. Keeping it separate ensures:
//!
//! - **Cross-crate compatibility**: core and CLI agree on phrase, config and error types
//! - **Clean boundaries**: no dependency from the types back onto the pipeline

#![warn(missing_docs)]

use core::fmt;
use std::borrow::{Borrow, Cow};
use std::io;
use std::path::PathBuf;

/// Occurrence count of a phrase.
pub type Count = u64;

/// Default number of entries kept by the ranker.
pub const DEFAULT_LIMIT: usize = 100;

/// Label used for standard input in reports.
pub const STDIN_LABEL: &str = "StdIn";

/// Three normalized tokens joined by single spaces.
///
/// A phrase is only built through [`Phrase::from_tokens`], so the text always
/// holds exactly three words in their original order. Equality, hashing and
/// ordering are those of the underlying text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Phrase(String);

impl Phrase {
    /// Joins three tokens into a phrase.
    #[inline]
    pub fn from_tokens(first: &str, second: &str, third: &str) -> Self {
        let mut text = String::with_capacity(first.len() + second.len() + third.len() + 2);
        text.push_str(first);
        text.push(' ');
        text.push_str(second);
        text.push(' ');
        text.push_str(third);
        Self(text)
    }

    /// Returns the phrase text.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the three words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Consumes the phrase, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Phrase {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` honours width and precision, which the report table relies on.
        f.pad(&self.0)
    }
}

/// A phrase together with its count, as produced by the ranker.
///
/// Entries are ordered by count (higher is greater), then by phrase
/// (lexicographically smaller is greater), so sorting in descending order
/// yields the final ranking with a deterministic tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPhrase {
    /// The phrase text.
    pub phrase: Phrase,
    /// Number of times the phrase occurred.
    pub count: Count,
}

impl RankedPhrase {
    /// Creates a new ranked entry.
    #[inline]
    pub const fn new(phrase: Phrase, count: Count) -> Self {
        Self { phrase, count }
    }
}

impl PartialOrd for RankedPhrase {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedPhrase {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: count. Secondary: phrase, reversed so "a b c" outranks "d e f".
        match self.count.cmp(&other.count) {
            core::cmp::Ordering::Equal => other.phrase.cmp(&self.phrase),
            ord => ord,
        }
    }
}

impl fmt::Display for RankedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phrase, self.count)
    }
}

/// How an input is read before windowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Line by line, carrying at most two tokens across line breaks.
    #[default]
    Streaming,
    /// The whole input is read into memory and tokenized in one pass.
    WholeBuffer,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Streaming => f.write_str("streaming"),
            Mode::WholeBuffer => f.write_str("whole-buffer"),
        }
    }
}

/// Which characters count as word characters in the token grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordClass {
    /// `[A-Za-z0-9_]` only.
    #[default]
    Ascii,
    /// Unicode letters, marks, digits and connector punctuation.
    Unicode,
}

/// Counting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    /// Read strategy.
    pub mode: Mode,
    /// Maximum number of ranked entries reported per input.
    pub limit: usize,
    /// Word character class used by the tokenizer.
    pub word_class: WordClass,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::streaming()
    }
}

impl CountConfig {
    /// Line-by-line counting with the default limit.
    pub const fn streaming() -> Self {
        Self {
            mode: Mode::Streaming,
            limit: DEFAULT_LIMIT,
            word_class: WordClass::Ascii,
        }
    }

    /// Whole-buffer counting with the default limit.
    pub const fn whole_buffer() -> Self {
        Self {
            mode: Mode::WholeBuffer,
            limit: DEFAULT_LIMIT,
            word_class: WordClass::Ascii,
        }
    }
}

/// Where an input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// Label printed in reports: `StdIn` or the file path.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Source::Stdin => Cow::Borrowed(STDIN_LABEL),
            Source::File(path) => path.to_string_lossy(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Errors raised while obtaining text from an input.
///
/// Text content itself never fails: characters outside the word grammar are
/// skipped and invalid UTF-8 is replaced.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input could not be opened.
    #[error("cannot open file: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading from an opened input failed.
    #[error("read failed: {source}")]
    Read {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}
