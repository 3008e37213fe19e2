//! Pre-indexed section lookup.
//!
//! Reads the source once and records every boundary with the byte range of
//! the section it opens. Lookups then walk the boundary list in memory and
//! apply the same match rule as [`SectionExtractor`](crate::extract::SectionExtractor),
//! so both produce identical output.

use crate::config::Config;
use crate::constants::ReservedSection;
use crate::extract::{Extraction, SectionSource};
use crate::scanner::trim_terminator;
use crate::Result;
use std::io::{Read, Write};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Boundary {
    /// The seeded boundary in effect before the first boundary line.
    Preamble,
    /// Byte range of the boundary text after the delimiter, terminator excluded.
    Line(Range<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    boundary: Boundary,
    body: Range<usize>,
    lines: usize,
}

impl IndexEntry {
    fn opening(boundary: Boundary, at: usize) -> Self {
        Self {
            boundary,
            body: at..at,
            lines: 0,
        }
    }
}

/// An in-memory copy of the source with its section boundaries.
#[derive(Debug)]
pub struct SectionIndex<'c> {
    config: &'c Config,
    content: Vec<u8>,
    entries: Vec<IndexEntry>,
}

impl<'c> SectionIndex<'c> {
    /// Reads `source` to the end and indexes its boundaries.
    pub fn build<R: Read>(config: &'c Config, mut source: R) -> Result<Self> {
        let mut content = Vec::new();
        source.read_to_end(&mut content)?;

        let delimiter = config.delimiter();
        let mut entries = Vec::new();
        let mut current = IndexEntry::opening(Boundary::Preamble, 0);
        let mut offset = 0;

        for line in content.split_inclusive(|b| *b == b'\n') {
            let end = offset + line.len();
            if delimiter.begins(line) {
                let rest = offset + delimiter.as_bytes().len()..offset + trim_terminator(line).len();
                let next = IndexEntry::opening(Boundary::Line(rest), end);
                entries.push(std::mem::replace(&mut current, next));
            } else {
                current.body.end = end;
                current.lines += 1;
            }
            offset = end;
        }
        entries.push(current);

        Ok(Self {
            config,
            content,
            entries,
        })
    }

    /// Number of boundary lines in the source, not counting the preamble.
    pub fn boundary_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Boundary texts in source order, the seeded preamble name first.
    pub fn boundaries(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.iter().map(|entry| self.boundary_text(entry))
    }

    fn boundary_text(&self, entry: &IndexEntry) -> &[u8] {
        match &entry.boundary {
            Boundary::Preamble => ReservedSection::Preamble.as_bytes(),
            Boundary::Line(range) => &self.content[range.clone()],
        }
    }
}

impl SectionSource for SectionIndex<'_> {
    fn extract_name<W: Write + ?Sized>(&mut self, name: &[u8], out: &mut W) -> Result<Extraction> {
        let mode = self.config.match_mode();

        if mode.is_whole_file(name) {
            out.write_all(&self.content)?;
            return Ok(Extraction::WholeFile {
                bytes: self.content.len() as u64,
            });
        }

        let mut matched = false;
        let mut lines = 0;
        for entry in &self.entries {
            if mode.matches(name, self.boundary_text(entry)) {
                matched = true;
                lines += entry.lines;
                out.write_all(&self.content[entry.body.clone()])?;
            }
        }

        Ok(if matched {
            Extraction::Section { lines }
        } else {
            Extraction::Unmatched
        })
    }
}
