//! Three-word sliding window.
//!
//! Turns a word sequence into overlapping phrases: `a b c d` yields
//! `a b c` and `b c d`. For fewer than three words nothing is emitted; for N
//! words exactly N-2 phrases are emitted.
//!
//! [`PhraseWindow`] is the incremental form used when reading line by line. It
//! carries at most two pending words between pushes, so a phrase may start on
//! one line and end on the next. [`count_slice`] is the whole-buffer form over
//! an already collected word list. Both emit the same phrases in the same
//! order for the same word sequence.

use smallvec::SmallVec;
use triphrase_types::Phrase;

/// Receiver of completed phrases.
///
/// This lets the window feed the frequency table during counting and a plain
/// `Vec` in tests.
pub trait PhraseSink {
    /// Records one occurrence of `phrase`.
    fn record(&mut self, phrase: Phrase);

    /// Notes that `n` more words went through the window.
    #[inline]
    fn note_tokens(&mut self, n: u64) {
        let _ = n;
    }
}

impl PhraseSink for Vec<Phrase> {
    #[inline]
    fn record(&mut self, phrase: Phrase) {
        self.push(phrase);
    }
}

/// Incremental three-word window with a carry-over buffer.
#[derive(Debug, Default, Clone)]
pub struct PhraseWindow {
    pending: SmallVec<[String; 3]>,
    tokens: u64,
}

impl PhraseWindow {
    /// Creates an empty window.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the next word, emitting a phrase once three words are held.
    ///
    /// After emitting, only the oldest word is dropped so consecutive
    /// phrases overlap by two words.
    #[inline]
    pub fn push<S: PhraseSink + ?Sized>(&mut self, token: String, sink: &mut S) {
        self.tokens += 1;
        sink.note_tokens(1);
        self.pending.push(token);

        if self.pending.len() == 3 {
            sink.record(Phrase::from_tokens(
                &self.pending[0],
                &self.pending[1],
                &self.pending[2],
            ));
            self.pending.remove(0);
        }
    }

    /// Pushes every word of `tokens` in order.
    pub fn extend<I, S>(&mut self, tokens: I, sink: &mut S)
    where
        I: IntoIterator<Item = String>,
        S: PhraseSink + ?Sized,
    {
        for token in tokens {
            self.push(token, sink);
        }
    }

    /// Words carried over, waiting to complete a phrase (at most two).
    #[inline]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Total number of words pushed so far.
    #[inline(always)]
    pub fn tokens_seen(&self) -> u64 {
        self.tokens
    }
}

/// Emits every phrase of an already collected word list.
///
/// Equivalent to pushing `tokens` through a fresh [`PhraseWindow`].
#[inline]
pub fn count_slice<T, S>(tokens: &[T], sink: &mut S)
where
    T: AsRef<str>,
    S: PhraseSink + ?Sized,
{
    sink.note_tokens(tokens.len() as u64);
    for window in tokens.windows(3) {
        sink.record(Phrase::from_tokens(
            window[0].as_ref(),
            window[1].as_ref(),
            window[2].as_ref(),
        ));
    }
}

/// Number of phrases a word sequence of length `tokens` yields.
#[inline(always)]
pub const fn phrase_count(tokens: usize) -> usize {
    tokens.saturating_sub(2)
}
