//! # Splitter
//!
//! Field sources that feed weighted data files.
//!
//! A field source hands out one record at a time as an ordered list of text
//! fields. Exhaustion is only known *after* a read has been attempted past the
//! last record, so consumers follow a pull-then-check protocol:
//!
//! ```rust
//! use splitter::{FieldSource, TextSplitter};
//!
//! let mut src = TextSplitter::from_reader("3\tA\n\n1\tC\n".as_bytes());
//! let mut fields = src.next_record().unwrap();
//! let mut seen = Vec::new();
//! while !src.is_exhausted() {
//!     seen.push(fields);
//!     fields = src.next_record().unwrap();
//! }
//! assert_eq!(seen.len(), 3); // the blank line comes through as `[""]`
//! assert_eq!(seen[1], vec![String::new()]);
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default field delimiter for weighted input files.
pub const DEFAULT_DELIMITER: char = '\t';

/// A pull-based producer of records, each an ordered list of text fields.
///
/// # Protocol
///
/// Call [`next_record`](FieldSource::next_record) first, then check
/// [`is_exhausted`](FieldSource::is_exhausted). Once exhausted, the fields
/// returned by the read that discovered the end must be discarded.
///
/// A record consisting of a single empty field is a blank input line.
pub trait FieldSource {
    /// Reads the next record's fields.
    fn next_record(&mut self) -> io::Result<Vec<String>>;

    /// Returns `true` once a read has gone past the last record.
    fn is_exhausted(&self) -> bool;
}

impl<S: FieldSource + ?Sized> FieldSource for &mut S {
    fn next_record(&mut self) -> io::Result<Vec<String>> {
        (**self).next_record()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// Splits delimiter-separated lines from a reader into field lists.
///
/// One line is one record. Trailing `\n` / `\r\n` is stripped before
/// splitting; no quoting or escaping is recognised. A final line without a
/// trailing newline is still returned as a record.
pub struct TextSplitter<R: Read> {
    rdr: BufReader<R>,
    delimiter: char,
    buf: String,
    exhausted: bool,
}

impl TextSplitter<File> {
    /// Opens `path` for splitting with the default (tab) delimiter.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<TextSplitter<File>> {
        let f = File::open(path)?;
        Ok(TextSplitter::from_reader(f))
    }
}

impl<R: Read> TextSplitter<R> {
    pub fn from_reader(reader: R) -> Self {
        TextSplitter {
            rdr: BufReader::new(reader),
            delimiter: DEFAULT_DELIMITER,
            buf: String::new(),
            exhausted: false,
        }
    }

    /// Sets the field delimiter (builder style).
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl<R: Read> FieldSource for TextSplitter<R> {
    fn next_record(&mut self) -> io::Result<Vec<String>> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        self.buf.clear();
        if self.rdr.read_line(&mut self.buf)? == 0 {
            self.exhausted = true;
            return Ok(Vec::new());
        }

        let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(line.split(self.delimiter).map(str::to_owned).collect())
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    // -------------------- Helpers --------------------

    fn drain<S: FieldSource>(src: &mut S) -> Result<Vec<Vec<String>>> {
        let mut out = Vec::new();
        let mut fields = src.next_record()?;
        while !src.is_exhausted() {
            out.push(fields);
            fields = src.next_record()?;
        }
        Ok(out)
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    // -------------------- Splitting --------------------

    #[test]
    fn splits_on_tab_by_default() -> Result<()> {
        let mut src = TextSplitter::from_reader("3\tNYSE\tNew York\n".as_bytes());
        assert_eq!(drain(&mut src)?, vec![row(&["3", "NYSE", "New York"])]);
        Ok(())
    }

    #[test]
    fn custom_delimiter() -> Result<()> {
        let mut src = TextSplitter::from_reader("1,A,B\n2,C\n".as_bytes()).with_delimiter(',');
        assert_eq!(src.delimiter(), ',');
        assert_eq!(drain(&mut src)?, vec![row(&["1", "A", "B"]), row(&["2", "C"])]);
        Ok(())
    }

    #[test]
    fn strips_crlf() -> Result<()> {
        let mut src = TextSplitter::from_reader("1\tA\r\n2\tB\r\n".as_bytes());
        assert_eq!(drain(&mut src)?, vec![row(&["1", "A"]), row(&["2", "B"])]);
        Ok(())
    }

    #[test]
    fn empty_fields_are_kept() -> Result<()> {
        let mut src = TextSplitter::from_reader("1\t\tX\t\n".as_bytes());
        assert_eq!(drain(&mut src)?, vec![row(&["1", "", "X", ""])]);
        Ok(())
    }

    // -------------------- Blank lines & end of input --------------------

    #[test]
    fn blank_line_is_single_empty_field() -> Result<()> {
        let mut src = TextSplitter::from_reader("\n1\tA\n\n".as_bytes());
        assert_eq!(drain(&mut src)?, vec![row(&[""]), row(&["1", "A"]), row(&[""])]);
        Ok(())
    }

    #[test]
    fn last_line_without_newline_is_not_lost() -> Result<()> {
        let mut src = TextSplitter::from_reader("1\tA\n2\tB".as_bytes());
        assert_eq!(drain(&mut src)?, vec![row(&["1", "A"]), row(&["2", "B"])]);
        Ok(())
    }

    #[test]
    fn empty_input_is_exhausted_after_first_read() -> Result<()> {
        let mut src = TextSplitter::from_reader(io::empty());
        assert!(!src.is_exhausted());
        assert!(src.next_record()?.is_empty());
        assert!(src.is_exhausted());
        // further reads stay exhausted
        assert!(src.next_record()?.is_empty());
        assert!(src.is_exhausted());
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut src = TextSplitter::from_reader(&[0xff, 0xfe, b'\n'][..]);
        assert!(src.next_record().is_err());
    }

    // -------------------- Files --------------------

    #[test]
    fn open_reads_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("Exchange.txt");
        fs::write(&path, "1\tNYSE\n\n2\tNASDAQ\n")?;

        let mut src = TextSplitter::open(&path)?;
        let recs = drain(&mut src)?;
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[2], row(&["2", "NASDAQ"]));
        Ok(())
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(TextSplitter::open(dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn mut_ref_is_a_field_source() -> Result<()> {
        let mut src = TextSplitter::from_reader("1\tA\n".as_bytes());
        let mut by_ref = &mut src;
        assert_eq!(drain(&mut by_ref)?.len(), 1);
        assert!(src.is_exhausted());
        Ok(())
    }
}
