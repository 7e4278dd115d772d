//! Line-oriented, rewindable input for the two-pass scanner
//!
//! The scanner only needs "next line or end of input", a way to tell a full
//! line from a truncated one, and a rewind to the start between passes.

use crate::constants::DEFAULT_MAX_LINE_LENGTH;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// One line as returned by a [`LineReader`], terminator preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    bytes: &'a [u8],
    complete: bool,
}

impl<'a> Line<'a> {
    pub fn new(bytes: &'a [u8], complete: bool) -> Self {
        Self { bytes, complete }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// `false` when the line was cut at the reader's maximum length
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Source of lines that can be replayed from the beginning
pub trait LineReader {
    /// Read the next line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<Line<'_>>>;

    /// Reposition at the first line
    fn rewind(&mut self) -> io::Result<()>;
}

/// [`LineReader`] over any seekable byte source
#[derive(Debug)]
pub struct BufLineReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
    max_line_length: usize,
}

impl BufLineReader<File> {
    /// Open a GFF3 file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        Ok(Self::new(file))
    }
}

impl<R: Read + Seek> BufLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            buf: Vec::new(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Set the maximum line length in bytes, terminator included
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read + Seek> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let limit = self.max_line_length as u64;
        let n = (&mut self.inner)
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }

        // A final line without terminator is still complete
        let complete = self.buf.last() == Some(&b'\n') || self.inner.fill_buf()?.is_empty();
        Ok(Some(Line::new(&self.buf, complete)))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}
