//! Word Tokenizer Module
//!
//! This module turns raw text into the normalized words the phrase window
//! consumes. It's the first stage of the counting pipeline.
//!
//! ## What It Does
//!
//! Given input like `"It's a well-known fact."`, it emits each word,
//! lower-cased, in order of appearance:
//!
//! ```ignore
//! "it's"
//! "a"
//! "well-known"
//! "fact"
//! ```
//!
//! ## The Word Grammar
//!
//! Words are matched left to right, and at each position the first shape
//! that fits wins:
//!
//! 1. **Contraction**: word chars, one apostrophe, word chars (`it's`)
//! 2. **Hyphenated pair**: word chars, an optional hyphen, word chars (`well-known`)
//! 3. **Bare run**: word chars (`fact`, `42`, `abc123`)
//!
//! Everything else (punctuation, whitespace, symbols) is skipped. Skipped
//! characters never fail and never corrupt neighbouring words; they are just
//! not part of any match.
//!
//! ## Word Characters
//!
//! [`WordClass::Ascii`] restricts word characters to `[A-Za-z0-9_]`.
//! [`WordClass::Unicode`] accepts any Unicode word character, so `café`
//! stays one word instead of splitting into `caf`.
//!
//! ## Usage
//!
//! ```rust
//! use triphrase_core::analyzer::tokenizer::Tokenizer;
//! use triphrase_types::WordClass;
//!
//! let tokenizer = Tokenizer::new(WordClass::Ascii);
//! let words: Vec<String> = tokenizer.tokens("The CAT sat.").collect();
//! assert_eq!(words, ["the", "cat", "sat"]);
//! ```

use once_cell::sync::Lazy;
use regex::{Matches, Regex};
use triphrase_types::WordClass;

use super::normalizer::{lowercase, lowercase_into};

static ASCII_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\w+'\w+|\w+-?\w+|\w+)").expect("ascii word pattern"));

static UNICODE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+'\w+|\w+-?\w+|\w+").expect("unicode word pattern"));

/// Splits text into lower-cased words.
///
/// The tokenizer itself is stateless and `Copy`; each call starts a fresh
/// scan over the text it is given.
#[derive(Debug, Copy, Clone, Default)]
#[repr(transparent)]
pub struct Tokenizer {
    word_class: WordClass,
}

impl Tokenizer {
    /// Creates a tokenizer for the given word character class.
    #[inline]
    pub const fn new(word_class: WordClass) -> Self {
        Self { word_class }
    }

    /// Word character class used by this tokenizer.
    #[inline(always)]
    pub const fn word_class(&self) -> WordClass {
        self.word_class
    }

    #[inline(always)]
    fn pattern(&self) -> &'static Regex {
        match self.word_class {
            WordClass::Ascii => &ASCII_WORD,
            WordClass::Unicode => &UNICODE_WORD,
        }
    }

    /// Returns a lazy iterator over the words of `text`.
    ///
    /// The iterator is finite and cannot be rewound; call `tokens` again for
    /// a second pass.
    #[inline]
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'static, 't> {
        Tokens {
            matches: self.pattern().find_iter(text),
        }
    }

    /// Emits each word of `text` through `emit`.
    ///
    /// The emitted slice points into a scratch buffer reused across words, so
    /// callers that keep a word must copy it.
    pub fn tokenize<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        let mut scratch = String::new();
        for m in self.pattern().find_iter(text) {
            lowercase_into(m.as_str(), &mut scratch);
            emit(&scratch);
        }
    }

    /// Collects every word of `text`.
    pub fn collect(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }
}

/// Lazy sequence of lower-cased words, created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'r, 't> {
    matches: Matches<'r, 't>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<String> {
        self.matches.next().map(|m| lowercase(m.as_str()))
    }
}
