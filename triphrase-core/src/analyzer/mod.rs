//! Text analysis pipeline.
//!
//! This module provides the word processing components:
//! - **Normalizer**: Lower-cases matched words
//! - **Tokenizer**: Extracts words from raw text by a fixed word grammar
//! - **Window**: Slides a three-word window over the words to form phrases

pub mod normalizer;
pub mod tokenizer;
pub mod window;

pub use tokenizer::{Tokenizer, Tokens};
pub use window::{count_slice, PhraseSink, PhraseWindow};
