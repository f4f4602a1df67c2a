//! Input sources and line reading.
//!
//! Text arrives either line by line ([`LineReader`]) or as one buffer
//! ([`read_whole`]). Both decode invalid UTF-8 lossily: malformed bytes become
//! U+FFFD, which the tokenizer then skips like any other non-word character.
//! Only genuine I/O faults are reported, as [`InputError`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use memchr::memchr;
use triphrase_types::{InputError, Source};

/// Opens `source` for buffered reading.
///
/// # Errors
///
/// Returns `InputError::Open` if a file cannot be opened.
pub fn open_source(source: &Source) -> Result<Box<dyn BufRead>, InputError> {
    match source {
        Source::Stdin => Ok(Box::new(io::stdin().lock())),
        Source::File(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Splits a buffered reader into lines.
///
/// Lines end at `\n`; a trailing `\r` is removed and a final line without a
/// terminator is still returned.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    raw: Vec<u8>,
    lines: u64,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::with_capacity(256),
            lines: 0,
        }
    }

    /// Reads the next line into `line`, clearing it first.
    ///
    /// Returns `Ok(false)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Read` if the underlying reader fails.
    pub fn read_line_into(&mut self, line: &mut String) -> Result<bool, InputError> {
        line.clear();
        self.raw.clear();

        let mut read_any = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                if !read_any {
                    return Ok(false);
                }
                break;
            }
            read_any = true;

            match memchr(b'\n', available) {
                Some(i) => {
                    self.raw.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    break;
                }
                None => {
                    let n = available.len();
                    self.raw.extend_from_slice(available);
                    self.reader.consume(n);
                }
            }
        }

        if self.raw.last() == Some(&b'\r') {
            self.raw.pop();
        }

        line.push_str(&String::from_utf8_lossy(&self.raw));
        self.lines += 1;
        Ok(true)
    }

    /// Number of lines returned so far.
    #[inline(always)]
    pub fn lines_read(&self) -> u64 {
        self.lines
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.read_line_into(&mut line) {
            Ok(true) => Some(Ok(line)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Reads the whole input into memory.
///
/// Lines are joined with `\n` and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns `InputError::Read` if the underlying reader fails.
pub fn read_whole<R: BufRead>(reader: R) -> Result<String, InputError> {
    let mut lines = LineReader::new(reader);
    let mut text = String::new();
    let mut line = String::new();

    while lines.read_line_into(&mut line)? {
        text.push_str(&line);
        text.push('\n');
    }

    let trimmed = text.trim();
    if trimmed.len() != text.len() {
        text = trimmed.to_owned();
    }
    Ok(text)
}
