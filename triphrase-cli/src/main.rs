//! triphrase CLI - report the most common three word phrases in text

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use env_logger::Env;

use triphrase_core::report::{write_banner, write_report};
use triphrase_core::PhraseCounter;
use triphrase_types::{CountConfig, Mode, Source, WordClass, DEFAULT_LIMIT};

/// Count three-word phrases in files or standard input and print the most
/// frequent ones.
#[derive(Parser, Debug)]
#[command(name = "triphrase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to read; standard input is read when none are given
    files: Vec<PathBuf>,

    /// Read each input fully into memory before counting
    #[arg(
        short,
        long,
        env = "TRIPHRASE_WHOLE_BUFFER",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    whole_buffer: bool,

    /// Number of phrases to report per input
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_LIMIT as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    limit: u64,

    /// Treat Unicode letters and digits as word characters
    #[arg(short, long)]
    unicode: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> CountConfig {
        CountConfig {
            mode: if self.whole_buffer {
                Mode::WholeBuffer
            } else {
                Mode::Streaming
            },
            limit: usize::try_from(self.limit).unwrap_or(usize::MAX),
            word_class: if self.unicode {
                WordClass::Unicode
            } else {
                WordClass::Ascii
            },
        }
    }

    fn sources(&self) -> Vec<Source> {
        if self.files.is_empty() {
            vec![Source::Stdin]
        } else {
            self.files.iter().cloned().map(Source::File).collect()
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

/// Processes every input in order, writing reports to `out`. Returns the
/// number of inputs that failed.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<usize> {
    let counter = PhraseCounter::new(cli.config());
    log::debug!("config: {:?}", counter.config());

    let mut failed = 0;

    for source in cli.sources() {
        write_banner(out, &source).context("failed to write output")?;

        match counter.process(&source) {
            Ok(report) => {
                write_report(out, &report).context("failed to write output")?;
            }
            Err(err) => {
                // One bad input never stops the rest.
                out.flush().context("failed to write output")?;
                eprintln!("error: {}: {err}", source.label());
                log::debug!("{source} failed: {err:?}");
                failed += 1;
            }
        }
        out.flush().context("failed to write output")?;
    }

    Ok(failed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::warn!("{failed} input(s) could not be processed");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
