//! The substitution driver: copy template lines, splice sections in place of
//! directive lines.

use crate::config::{Config, Strategy};
use crate::directive::classify;
use crate::extract::{SectionExtractor, SectionSource};
use crate::index::SectionIndex;
use crate::scanner::LineScanner;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Counters for one substitution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Template lines written through unchanged.
    pub copied_lines: usize,
    /// Directive lines replaced by a section.
    pub directives: usize,
    /// Directives whose section was not found in the source.
    pub unmatched: usize,
}

/// Runs a template against a source with a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Substitutor<'c> {
    config: &'c Config,
}

impl<'c> Substitutor<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Opens both files and runs the substitution into `out`.
    ///
    /// # Errors
    /// Returns `Error::Io` naming the path when either file cannot be opened.
    /// Nothing is written to `out` in that case.
    pub fn run_files<W: Write + ?Sized>(
        &self,
        template: &Path,
        source: &Path,
        out: &mut W,
    ) -> Result<RunSummary> {
        let template_file = File::open(template).map_err(|e| Error::io(template, e))?;
        let source_file = File::open(source).map_err(|e| Error::io(source, e))?;
        debug!(
            template = %template.display(),
            source = %source.display(),
            "Opened input files"
        );

        self.run(BufReader::new(template_file), BufReader::new(source_file), out)
    }

    /// Runs the substitution using the configured lookup strategy.
    pub fn run<T, S, W>(&self, template: T, source: S, out: &mut W) -> Result<RunSummary>
    where
        T: BufRead,
        S: BufRead + Seek,
        W: Write + ?Sized,
    {
        match self.config.strategy() {
            Strategy::Rescan => {
                let mut sections = SectionExtractor::new(self.config, source)?;
                self.drive(template, &mut sections, out)
            }
            Strategy::Indexed => {
                let mut sections = SectionIndex::build(self.config, source)?;
                debug!(boundaries = sections.boundary_count(), "Indexed source");
                self.drive(template, &mut sections, out)
            }
        }
    }

    /// Reads `template` line by line, writing plain lines through and
    /// replacing directive lines with what `sections` produces.
    pub fn drive<T, S, W>(&self, template: T, sections: &mut S, out: &mut W) -> Result<RunSummary>
    where
        T: BufRead,
        S: SectionSource + ?Sized,
        W: Write + ?Sized,
    {
        let delimiter = self.config.delimiter();
        let mut template = LineScanner::new(template);
        let mut summary = RunSummary::default();

        while let Some(line) = template.next_line()? {
            let Some(directive) = classify(line, delimiter) else {
                out.write_all(line)?;
                summary.copied_lines += 1;
                continue;
            };

            summary.directives += 1;
            let extraction = sections.extract(&directive, out)?;
            if extraction.is_matched() {
                debug!(directive = %directive.display_name(), ?extraction, "Expanded directive");
            } else {
                summary.unmatched += 1;
                warn!(directive = %directive.display_name(), "No section matches directive");
            }
        }
        out.flush()?;

        debug!(
            copied_lines = summary.copied_lines,
            directives = summary.directives,
            unmatched = summary.unmatched,
            "Substitution finished"
        );
        Ok(summary)
    }
}

/// Substitutes in memory.
///
/// # Example
/// ```
/// use tmpl_core::{Config, substitute};
///
/// let out = substitute(
///     "Hello\n#greeting\nBye\n",
///     "#greeting\nWorld\n#other\nX\n",
///     &Config::default(),
/// )
/// .unwrap();
/// assert_eq!(out, "Hello\nWorld\nBye\n");
/// ```
pub fn substitute(template: &str, source: &str, config: &Config) -> Result<String> {
    let mut out = Vec::new();
    Substitutor::new(config).run(
        Cursor::new(template.as_bytes()),
        Cursor::new(source.as_bytes()),
        &mut out,
    )?;
    // Output is made of whole input lines, so it stays valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
