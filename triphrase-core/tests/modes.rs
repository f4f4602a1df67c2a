//! Streaming and whole-buffer counting must agree on every input.

use std::collections::BTreeMap;
use std::io::Cursor;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triphrase_core::report::render;
use triphrase_core::{PhraseCounter, PhraseTable};
use triphrase_types::{CountConfig, WordClass};

const WORDS: &[&str] = &[
    "the", "The", "CAT", "cat", "sat", "it's", "well-known", "a", "fact", "42", "don't", "x_y",
];

const GAPS: &[&str] = &[" ", "  ", "\n", "\n\n", "\r\n", ", ", ". ", "\n   \n", "--", "\t", " ' "];

fn random_text(rng: &mut StdRng) -> String {
    let words = rng.random_range(0..60);
    let mut text = String::new();
    for _ in 0..words {
        text.push_str(GAPS[rng.random_range(0..GAPS.len())]);
        text.push_str(WORDS[rng.random_range(0..WORDS.len())]);
    }
    if rng.random_bool(0.5) {
        text.push('\n');
    }
    text
}

fn snapshot(table: &PhraseTable) -> BTreeMap<String, u64> {
    table
        .iter()
        .map(|(p, c)| (p.as_str().to_owned(), c))
        .collect()
}

fn count(config: CountConfig, text: &str) -> (BTreeMap<String, u64>, u64) {
    let table = PhraseCounter::new(config)
        .count(Cursor::new(text))
        .expect("in-memory read");
    (snapshot(&table), table.tokens_seen())
}

#[test]
fn modes_are_equivalent_on_random_text() {
    let mut rng = StdRng::seed_from_u64(0x7e1_9a3);

    for _ in 0..500 {
        let text = random_text(&mut rng);
        let (streamed, tokens_a) = count(CountConfig::streaming(), &text);
        let (buffered, tokens_b) = count(CountConfig::whole_buffer(), &text);

        assert_eq!(streamed, buffered, "modes disagree on {text:?}");
        assert_eq!(tokens_a, tokens_b);

        // n tokens give exactly n-2 phrases
        let phrases: u64 = streamed.values().sum();
        assert_eq!(phrases, tokens_a.saturating_sub(2), "bad phrase total for {text:?}");
    }
}

#[test]
fn modes_are_equivalent_with_unicode_words() {
    let text = "Über alles\nCafé au lait, café AU lait!\n\nnaïve naïve naïve";
    for word_class in [WordClass::Ascii, WordClass::Unicode] {
        let streaming = CountConfig {
            word_class,
            ..CountConfig::streaming()
        };
        let whole = CountConfig {
            word_class,
            ..CountConfig::whole_buffer()
        };
        assert_eq!(count(streaming, text), count(whole, text));
    }
}

#[test]
fn repeated_sentence_table() {
    let expected: BTreeMap<String, u64> = [
        ("the cat sat", 2),
        ("cat sat the", 2),
        ("sat the cat", 2),
        ("the cat ran", 1),
    ]
    .into_iter()
    .map(|(p, c)| (p.to_owned(), c))
    .collect();

    for config in [CountConfig::streaming(), CountConfig::whole_buffer()] {
        let (table, _) = count(config, "the cat sat the cat sat the cat ran");
        assert_eq!(table, expected);
    }
}

#[test]
fn same_text_split_over_lines() {
    let one_line = count(CountConfig::streaming(), "the cat sat the cat sat the cat ran");
    let many_lines = count(
        CountConfig::streaming(),
        "the\ncat sat\n\nthe cat\nsat the\n   \ncat\nran\n",
    );
    assert_eq!(one_line, many_lines);
}

#[test]
fn empty_input_renders_notice() {
    for config in [CountConfig::streaming(), CountConfig::whole_buffer()] {
        for text in ["", "\n\n", "  ...  !!", "two words"] {
            let report = PhraseCounter::new(config)
                .report(Cursor::new(text), "StdIn")
                .expect("in-memory read");
            assert!(report.is_empty());
            assert!(render(&report).contains("No three word phrases detected."));
        }
    }
}

#[test]
fn end_to_end_rendering() {
    let report = PhraseCounter::default()
        .report(Cursor::new("The cat sat.\nThe cat sat.\n"), "notes.txt")
        .expect("in-memory read");
    let out = render(&report);

    assert!(out.starts_with("Phrase"));
    assert!(out.contains(&format!("{:<40} |      2", "the cat sat")));
    assert!(out.contains(&format!("{:<40} |      1", "cat sat the")));
    assert!(out.contains(&format!("{:<40} |      1", "sat the cat")));
    assert!(out.ends_with("Finished Processing => notes.txt\n\n"));
}
