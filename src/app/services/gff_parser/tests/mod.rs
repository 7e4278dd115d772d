//! Test utilities for GFF3 parser testing
//!
//! Common fixtures and helper functions used across the parser test modules.

use std::io::{self, Cursor, Write};
use tempfile::NamedTempFile;

use crate::app::adapters::line_reader::{BufLineReader, Line, LineReader};


/// Helper to build an in-memory reader
pub fn reader_from_str(content: &str) -> BufLineReader<Cursor<Vec<u8>>> {
    BufLineReader::new(Cursor::new(content.as_bytes().to_vec()))
}

/// Helper to create a representative GFF3 document
pub fn create_test_gff() -> String {
    "##gff-version 3\n\
     ##sequence-region chr1 1 10000\n\
     # generated for tests\n\
     chr1\tRefSeq\tgene\t100\t900\t.\t+\t.\tID=gene1;Name=ABC1\n\
     chr1\tRefSeq\tmRNA\t100\t900\t.\t+\t.\tID=rna1;Parent=gene1\n\
     \n\
     chr1\tRefSeq\texon\t100\t300\t12.5\t+\t.\tID=exon1;Parent=rna1\n\
     chr1\tRefSeq\tCDS\t150\t300\t.\t+\t0\tID=cds1;Parent=rna1;Note=partial\n\
     chr2\t.\tgene\t5000\t7000\t.\t?\t.\tID=gene2\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Reader that fails with an I/O error after a number of lines
pub struct FailingReader {
    lines: Vec<Vec<u8>>,
    position: usize,
    fail_at: usize,
}

impl FailingReader {
    pub fn new(content: &str, fail_at: usize) -> Self {
        Self {
            lines: content
                .split_inclusive('\n')
                .map(|l| l.as_bytes().to_vec())
                .collect(),
            position: 0,
            fail_at,
        }
    }
}

impl LineReader for FailingReader {
    fn read_line(&mut self) -> io::Result<Option<Line<'_>>> {
        if self.position == self.fail_at {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "disk on fire"));
        }
        let line = self.lines.get(self.position);
        self.position += 1;
        Ok(line.map(|l| Line::new(l, true)))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.position = 0;
        Ok(())
    }
}

/// Reader whose content changes after the first rewind
pub struct ShiftingReader {
    passes: [Vec<Vec<u8>>; 2],
    rewinds: usize,
    position: usize,
}

impl ShiftingReader {
    pub fn new(first: &str, second: &str) -> Self {
        let split = |s: &str| {
            s.split_inclusive('\n')
                .map(|l| l.as_bytes().to_vec())
                .collect::<Vec<_>>()
        };
        Self {
            passes: [split(first), split(second)],
            rewinds: 0,
            position: 0,
        }
    }
}

impl LineReader for ShiftingReader {
    fn read_line(&mut self) -> io::Result<Option<Line<'_>>> {
        let pass = self.rewinds.saturating_sub(1).min(1);
        let line = self.passes[pass].get(self.position);
        self.position += 1;
        Ok(line.map(|l| Line::new(l, true)))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.rewinds += 1;
        self.position = 0;
        Ok(())
    }
}
