//! Phrase Counting Benchmark
//!
//! Measures the counting pipeline on a large text file, such as a book or a
//! Wikipedia dump, to compare the two read strategies.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: word extraction and lower-casing over the whole file
//! 2. **Streaming**: line-by-line counting with the carry-over window
//! 3. **Whole buffer**: reading everything, tokenizing once, windowing the list
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/phrase_bench /path/to/book.txt
//!
//! # Use Unicode word characters
//! ./target/release/phrase_bench /path/to/book.txt unicode
//! ```
//!
//! Build with `--release`; use inputs of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::hint::black_box;
use std::io::Cursor;
use std::time::{Duration, Instant};

use triphrase_core::analyzer::Tokenizer;
use triphrase_core::PhraseCounter;
use triphrase_types::{CountConfig, WordClass};

const MEASURE_RUNS: u32 = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: phrase_bench <path> [ascii|unicode]");
        std::process::exit(1);
    }

    let path = &args[1];

    let word_class = match args.get(2).map(String::as_str) {
        Some("unicode") => WordClass::Unicode,
        _ => WordClass::Ascii,
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;

    println!("File size:  {:.2} MiB", mib(bytes.len()));
    println!("Word class: {:?}\n", word_class);

    let text = String::from_utf8_lossy(&bytes);
    bench_tokenize(&text, word_class);

    for config in [CountConfig::streaming(), CountConfig::whole_buffer()] {
        bench_count(
            &bytes,
            CountConfig {
                word_class,
                ..config
            },
        );
    }

    Ok(())
}

fn bench_tokenize(input: &str, word_class: WordClass) {
    let tokenizer = Tokenizer::new(word_class);

    println!("=== Tokenize ===");

    let mut tokens = 0u64;
    let per_run = time_runs(|| {
        tokens = 0;
        tokenizer.tokenize(input, |_w| tokens += 1);
        black_box(tokens);
    });

    summarize(&Run {
        label: "tokenize",
        bytes: input.len(),
        per_run,
        tokens,
        distinct: None,
    });
}

fn bench_count(input: &[u8], config: CountConfig) {
    let counter = PhraseCounter::new(config);
    let label = config.mode.to_string();

    println!("=== Count ({label}) ===");

    if let Err(e) = counter.count(Cursor::new(input)) {
        eprintln!("{label}: read failed, skipping: {e}");
        return;
    }

    let mut last = None;
    let per_run = time_runs(|| last = counter.count(Cursor::new(input)).ok());

    let Some(table) = last else {
        eprintln!("{label}: read failed during measurement");
        return;
    };
    summarize(&Run {
        label: &label,
        bytes: input.len(),
        per_run,
        tokens: table.tokens_seen(),
        distinct: Some(table.len()),
    });
}

/// One timed pass, averaged over [`MEASURE_RUNS`].
struct Run<'a> {
    label: &'a str,
    bytes: usize,
    per_run: Duration,
    tokens: u64,
    distinct: Option<usize>,
}

/// Runs `f` once untimed, then returns its mean wall time.
fn time_runs<F: FnMut()>(mut f: F) -> Duration {
    f();
    let start = Instant::now();
    for _ in 0..MEASURE_RUNS {
        f();
    }
    start.elapsed() / MEASURE_RUNS
}

fn summarize(run: &Run<'_>) {
    let secs = run.per_run.as_secs_f64().max(f64::EPSILON);

    println!("{:>12}: {:.3} s", run.label, secs);
    println!("{:>12}: {:.1} MiB/s", "throughput", mib(run.bytes) / secs);
    println!(
        "{:>12}: {} ({}/s)",
        "tokens",
        grouped(run.tokens),
        grouped((run.tokens as f64 / secs) as u64)
    );
    if let Some(distinct) = run.distinct {
        println!("{:>12}: {}", "distinct", grouped(distinct as u64));
    }
    println!();
}

fn mib(bytes: usize) -> f64 {
    bytes as f64 / (1 << 20) as f64
}

/// `1234567` -> `1,234,567`.
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::from(&digits[..head]);
    for chunk in digits.as_bytes()[head..].chunks(3) {
        if !out.is_empty() {
            out.push(',');
        }
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}
