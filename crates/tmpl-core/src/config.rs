//! Run configuration: delimiter, match mode and lookup strategy.
//!
//! A [`Config`] is built once at startup and passed by reference to every
//! component. It can be layered from a [`ConfigFile`] whose format is detected
//! from the file extension.

use crate::constants::ReservedSection;
use crate::directive::leading_token;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The single character marking directive lines and section boundaries.
///
/// Stored together with its UTF-8 encoding so lines can be compared as bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    ch: char,
    encoded: [u8; 4],
    len: usize,
}

impl Delimiter {
    /// Create a delimiter, rejecting whitespace.
    ///
    /// # Errors
    /// Returns `Error::InvalidDelimiter` for any whitespace character, since
    /// whitespace terminates directive tokens.
    pub fn new(ch: char) -> Result<Self> {
        if ch.is_whitespace() {
            return Err(Error::InvalidDelimiter {
                delimiter: ch,
                reason: "whitespace cannot start a directive",
            });
        }
        let mut encoded = [0u8; 4];
        let len = ch.encode_utf8(&mut encoded).len();
        Ok(Self { ch, encoded, len })
    }

    pub fn as_char(&self) -> char {
        self.ch
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded[..self.len]
    }

    /// Whether `line` starts with the delimiter in its first column.
    pub fn begins(&self, line: &[u8]) -> bool {
        line.starts_with(self.as_bytes())
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self {
            ch: '#',
            encoded: [b'#', 0, 0, 0],
            len: 1,
        }
    }
}

/// How a requested section name is compared against a boundary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The boundary token (up to the first whitespace) must equal the name.
    #[default]
    Strict,
    /// Compare only the first `min(len(name), len(rest))` bytes.
    ///
    /// A short name matches any longer boundary sharing its prefix, and a
    /// bare delimiter line matches every name.
    Legacy,
}

impl MatchMode {
    /// Whether a boundary whose text after the delimiter is `rest` opens the
    /// section `requested`. `rest` must not include the line terminator.
    pub fn matches(self, requested: &[u8], rest: &[u8]) -> bool {
        match self {
            Self::Strict => leading_token(rest) == requested,
            Self::Legacy => {
                let n = requested.len().min(rest.len());
                requested[..n] == rest[..n]
            }
        }
    }

    /// Whether `requested` names the whole-file directive.
    pub fn is_whole_file(self, requested: &[u8]) -> bool {
        self.matches(requested, ReservedSection::WholeFile.as_bytes())
    }
}

/// How sections are looked up in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Full linear scan of the source for every directive, rewinding after each.
    #[default]
    Rescan,
    /// Read the source once and answer every directive from memory.
    Indexed,
}

/// Immutable configuration for one substitution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    delimiter: Delimiter,
    special: Option<char>,
    match_mode: MatchMode,
    strategy: Strategy,
}

impl Config {
    /// Create a configuration with the given delimiter and defaults elsewhere.
    pub fn new(delimiter: char) -> Result<Self> {
        Self::default().with_delimiter(delimiter)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = Delimiter::new(delimiter)?;
        Ok(self)
    }

    /// Set the reserved secondary marker. It is carried but not interpreted.
    pub fn with_special(mut self, special: Option<char>) -> Self {
        self.special = special;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    pub fn special(&self) -> Option<char> {
        self.special
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

/// Settings read from a configuration file. Every field is optional.
///
/// ```toml
/// delimiter = "%"
/// match-mode = "legacy"
/// strategy = "indexed"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub delimiter: Option<char>,
    pub special: Option<char>,
    pub match_mode: Option<MatchMode>,
    pub strategy: Option<Strategy>,
}

impl ConfigFile {
    /// Load settings from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Layer these settings over `base`.
    pub fn apply(self, base: Config) -> Result<Config> {
        let mut config = base;
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter)?;
        }
        if let Some(special) = self.special {
            config = config.with_special(Some(special));
        }
        if let Some(match_mode) = self.match_mode {
            config = config.with_match_mode(match_mode);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        Ok(config)
    }
}
