//! Section extraction by rescanning the source.
//!
//! A source file is split into sections by boundary lines, which carry the
//! delimiter in their first column:
//! ```text
//! preamble line
//! #greeting
//! Hello
//! #farewell
//! Bye
//! ```
//! Requesting `greeting` yields `Hello\n`. Lines before the first boundary
//! belong to the reserved `@HEADER` section.

use crate::config::Config;
use crate::constants::ReservedSection;
use crate::directive::Directive;
use crate::scanner::{LineScanner, trim_terminator};
use crate::Result;
use std::io::{BufRead, Seek, Write};
use tracing::trace;

/// What a single directive lookup produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The whole source was copied.
    WholeFile { bytes: u64 },
    /// At least one boundary matched; `lines` lines were written.
    Section { lines: usize },
    /// Nothing matched and nothing was written.
    Unmatched,
}

impl Extraction {
    pub fn is_matched(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// Something that can answer section lookups for the substitution driver.
pub trait SectionSource {
    /// Write the section called `name` to `out`.
    fn extract_name<W: Write + ?Sized>(&mut self, name: &[u8], out: &mut W) -> Result<Extraction>;

    /// Write the section requested by a template directive to `out`.
    fn extract<W: Write + ?Sized>(
        &mut self,
        directive: &Directive<'_>,
        out: &mut W,
    ) -> Result<Extraction> {
        self.extract_name(directive.name(), out)
    }
}

/// Looks up sections with one full pass over the source per request.
///
/// The source is rewound after every lookup, so each call sees the whole
/// source regardless of what was requested before.
#[derive(Debug)]
pub struct SectionExtractor<'c, R> {
    config: &'c Config,
    source: LineScanner<R>,
}

impl<'c, R: BufRead + Seek> SectionExtractor<'c, R> {
    /// Wrap `source`, rewinding it to the start.
    pub fn new(config: &'c Config, source: R) -> Result<Self> {
        let mut source = LineScanner::new(source);
        source.rewind()?;
        Ok(Self { config, source })
    }

    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

impl<R: BufRead + Seek> SectionSource for SectionExtractor<'_, R> {
    fn extract_name<W: Write + ?Sized>(&mut self, name: &[u8], out: &mut W) -> Result<Extraction> {
        let config = self.config;
        let mode = config.match_mode();

        if mode.is_whole_file(name) {
            let bytes = self.source.copy_remaining(out)?;
            self.source.rewind()?;
            return Ok(Extraction::WholeFile { bytes });
        }

        let delimiter = config.delimiter();
        let mut printing = mode.matches(name, ReservedSection::Preamble.as_bytes());
        let mut matched = printing;
        let mut lines = 0;

        while let Some(line) = self.source.next_line()? {
            if delimiter.begins(line) {
                let rest = trim_terminator(&line[delimiter.as_bytes().len()..]);
                printing = mode.matches(name, rest);
                matched |= printing;
                trace!(boundary = %String::from_utf8_lossy(rest), printing, "Section boundary");
            } else if printing {
                out.write_all(line)?;
                lines += 1;
            }
        }
        self.source.rewind()?;

        Ok(if matched {
            Extraction::Section { lines }
        } else {
            Extraction::Unmatched
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn extract_str(config: &Config, source: &str, name: &str) -> (String, Extraction) {
        let mut extractor = SectionExtractor::new(config, Cursor::new(source.as_bytes())).unwrap();
        let mut out = Vec::new();
        let extraction = extractor.extract_name(name.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), extraction)
    }

    #[test]
    fn test_named_section_stops_at_next_boundary() {
        let (out, extraction) = extract_str(
            &Config::default(),
            "#greeting\nWorld\n#other\nX\n",
            "greeting",
        );
        assert_eq!(out, "World\n");
        assert_eq!(extraction, Extraction::Section { lines: 1 });
    }

    #[test]
    fn test_whole_file_copies_everything() {
        let source = "#greeting\nWorld\n#other\nX";
        let (out, extraction) = extract_str(&Config::default(), source, "@CONTENT");
        assert_eq!(out, source);
        assert_eq!(extraction, Extraction::WholeFile { bytes: 24 });
    }

    #[test]
    fn test_unmatched_writes_nothing() {
        let (out, extraction) = extract_str(&Config::default(), "#x\ny\n", "missing");
        assert_eq!(out, "");
        assert_eq!(extraction, Extraction::Unmatched);
    }

    #[test]
    fn test_preamble_only_through_reserved_name() {
        let source = "lead\n#intro\nbody\n";
        assert_eq!(extract_str(&Config::default(), source, "intro").0, "body\n");
        assert_eq!(extract_str(&Config::default(), source, "@HEADER").0, "lead\n");
    }

    #[test]
    fn test_source_is_rewound_after_each_lookup() {
        let config = Config::default();
        let mut extractor =
            SectionExtractor::new(&config, Cursor::new(b"#a\none\n#b\ntwo\n".to_vec())).unwrap();

        let mut out = Vec::new();
        extractor.extract_name(b"b", &mut out).unwrap();
        extractor.extract_name(b"a", &mut out).unwrap();
        extractor.extract_name(b"@CONTENT", &mut out).unwrap();
        extractor.extract_name(b"b", &mut out).unwrap();
        assert_eq!(out, b"two\none\n#a\none\n#b\ntwo\ntwo\n");

        let mut cursor = extractor.into_inner();
        assert_eq!(cursor.stream_position().unwrap(), 0);
    }

    #[test]
    fn test_new_rewinds_partially_read_source() {
        let mut cursor = Cursor::new(b"#a\none\n".to_vec());
        cursor.set_position(4);
        let config = Config::default();
        let mut extractor = SectionExtractor::new(&config, cursor).unwrap();

        let mut out = Vec::new();
        extractor.extract_name(b"a", &mut out).unwrap();
        assert_eq!(out, b"one\n");
    }

    #[test]
    fn test_legacy_prefix_match() {
        let config = Config::default().with_match_mode(MatchMode::Legacy);
        let source = "#greeting\nWorld\n#gr\nshort\n#other\nX\n";

        // `#gr` is shorter than both requests, so its two bytes decide alone.
        assert_eq!(extract_str(&config, source, "greet").0, "World\nshort\n");
        assert_eq!(extract_str(&config, source, "greeting").0, "World\nshort\n");
        assert_eq!(extract_str(&config, source, "oth").0, "X\n");

        let strict = Config::default();
        assert_eq!(extract_str(&strict, source, "greet").0, "");
        assert_eq!(extract_str(&strict, source, "greeting").0, "World\n");
        assert_eq!(extract_str(&strict, source, "gr").0, "short\n");
    }

    #[test]
    fn test_directive_uses_name_without_delimiter() {
        let config = Config::default();
        let mut extractor =
            SectionExtractor::new(&config, Cursor::new(b"#intro\nhi\n".to_vec())).unwrap();
        let directive = crate::directive::classify(b"  #intro\n", config.delimiter()).unwrap();

        let mut out = Vec::new();
        extractor.extract(&directive, &mut out).unwrap();
        assert_eq!(out, b"hi\n");
    }
}
