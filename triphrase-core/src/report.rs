//! Plain-text report rendering.
//!
//! One table per input:
//!
//! ```text
//! Phrase                                   |  Count
//! ==================================================
//! the cat sat                              |      2
//! ==================================================
//! Finished Processing => StdIn
//!
//! ```
//!
//! Phrases longer than the column are truncated; counts are right-aligned.

use std::io::{self, Write};

use triphrase_types::Source;

use crate::pipeline::Report;

/// Width of the phrase column, in characters.
pub const PHRASE_WIDTH: usize = 40;

/// Width of the count column, in characters.
pub const COUNT_WIDTH: usize = 6;

const RULE: &str = "==================================================";

/// Notice printed instead of a table when an input yields no phrases.
pub const EMPTY_NOTICE: &str = "No three word phrases detected.";

/// Writes the line announcing which input is about to be processed.
pub fn write_banner<W: Write>(w: &mut W, source: &Source) -> io::Result<()> {
    match source {
        Source::Stdin => writeln!(w, "Processing stdin..."),
        Source::File(path) => writeln!(w, "Processing: {}", path.display()),
    }
}

/// Writes the ranked table for one input, followed by the finish line.
pub fn write_report<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    if report.is_empty() {
        writeln!(w, "{RULE}")?;
        writeln!(w, "{EMPTY_NOTICE}")?;
        writeln!(w, "{RULE}")?;
    } else {
        writeln!(
            w,
            "{:<pw$} | {:>cw$}",
            "Phrase",
            "Count",
            pw = PHRASE_WIDTH,
            cw = COUNT_WIDTH
        )?;
        writeln!(w, "{RULE}")?;
        for entry in &report.ranked {
            writeln!(
                w,
                "{:<pw$.pw$} | {:>cw$}",
                entry.phrase,
                entry.count,
                pw = PHRASE_WIDTH,
                cw = COUNT_WIDTH
            )?;
        }
        writeln!(w, "{RULE}")?;
    }
    writeln!(w, "Finished Processing => {}", report.label)?;
    writeln!(w)
}

/// Renders a report into a String.
pub fn render(report: &Report) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut out, report);
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PhraseTable;
    use std::path::PathBuf;
    use triphrase_types::{Phrase, RankedPhrase};

    fn report(rows: &[(&str, u64)], label: &str) -> Report {
        let ranked: Vec<RankedPhrase> = rows
            .iter()
            .map(|&(text, count)| {
                let w: Vec<&str> = text.split(' ').collect();
                RankedPhrase::new(Phrase::from_tokens(w[0], w[1], w[2]), count)
            })
            .collect();
        let table: PhraseTable = ranked.iter().map(|r| r.phrase.clone()).collect();
        Report {
            label: label.to_owned(),
            ranked,
            stats: table.stats(),
        }
    }

    #[test]
    fn renders_table() {
        let out = render(&report(&[("the cat sat", 2), ("the cat ran", 1)], "StdIn"));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], format!("{:<40} |  Count", "Phrase"));
        assert_eq!(lines[1], RULE);
        assert_eq!(lines[2], format!("{:<40} |      2", "the cat sat"));
        assert_eq!(lines[3], format!("{:<40} |      1", "the cat ran"));
        assert_eq!(lines[4], RULE);
        assert_eq!(lines[5], "Finished Processing => StdIn");
        assert!(out.ends_with("StdIn\n\n"));
    }

    #[test]
    fn renders_empty_notice() {
        let out = render(&report(&[], "empty.txt"));
        assert_eq!(
            out,
            format!("{RULE}\n{EMPTY_NOTICE}\n{RULE}\nFinished Processing => empty.txt\n\n")
        );
    }

    #[test]
    fn zero_limit_renders_bare_table() {
        let mut r = report(&[("the cat sat", 2)], "StdIn");
        r.ranked.clear();
        let out = render(&r);
        assert!(!out.contains(EMPTY_NOTICE));
        assert_eq!(
            out,
            format!(
                "{:<40} |  Count\n{RULE}\n{RULE}\nFinished Processing => StdIn\n\n",
                "Phrase"
            )
        );
    }

    #[test]
    fn long_phrases_are_truncated() {
        let long = "a".repeat(30);
        let text = format!("{long} {long} {long}");
        let out = render(&report(&[(text.as_str(), 3)], "f"));
        let row = out.lines().nth(2).expect("row");
        assert_eq!(row, format!("{} |      3", &text[..PHRASE_WIDTH]));
    }

    #[test]
    fn rule_matches_row_width() {
        assert_eq!(RULE.len(), 50);
        assert!(PHRASE_WIDTH + 3 + COUNT_WIDTH <= RULE.len());
    }

    #[test]
    fn banner_lines() {
        let mut out = Vec::new();
        write_banner(&mut out, &Source::Stdin).expect("vec write");
        write_banner(&mut out, &Source::File(PathBuf::from("a.txt"))).expect("vec write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Processing stdin...\nProcessing: a.txt\n"
        );
    }
}
