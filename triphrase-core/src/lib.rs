//! Three-word phrase frequency counting.
//!
//! The pipeline runs one input at a time:
//!
//! ```text
//! input -> tokenizer -> phrase window -> frequency table -> ranker -> report
//! ```
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use triphrase_core::PhraseCounter;
//! use triphrase_types::CountConfig;
//!
//! let counter = PhraseCounter::new(CountConfig::default());
//! let report = counter
//!     .report(Cursor::new("the cat sat the cat sat the cat ran"), "StdIn")
//!     .unwrap();
//!
//! assert_eq!(report.ranked[0].phrase.as_str(), "cat sat the");
//! assert_eq!(report.ranked[0].count, 2);
//! ```

pub mod analyzer;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod table;

pub use pipeline::{PhraseCounter, Report};
pub use table::{PhraseTable, TableStats};
