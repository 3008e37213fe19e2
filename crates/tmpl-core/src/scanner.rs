//! Line-at-a-time reading over a buffered stream.

use std::io::{self, BufRead, Seek, Write};

/// Reads lines one at a time, keeping each line's terminator.
///
/// The line buffer grows to fit the longest line and is reused between calls.
/// A final line with no trailing `\n` is returned as is.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Reads the next line, terminator included.
    ///
    /// Returns `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(&self.line))
    }

    /// Copies everything from the current position to `out`, verbatim.
    pub fn copy_remaining<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<u64> {
        io::copy(&mut self.reader, out)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead + Seek> LineScanner<R> {
    /// Resets the read position to the start of the stream.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.reader.rewind()
    }

    /// The current read position.
    pub fn position(&mut self) -> io::Result<u64> {
        self.reader.stream_position()
    }
}

/// Strips a trailing `\n` or `\r\n`.
pub fn trim_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
