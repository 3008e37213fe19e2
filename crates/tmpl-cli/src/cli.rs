//! CLI argument parsing using clap derive

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tmpl_core::{Config, ConfigFile, MatchMode, Strategy};

use crate::error::Result;

/// Splice named sections of a source file into a template.
///
/// Template lines whose first non-blank character is the delimiter are
/// replaced by the matching section of SOURCE; every other line is copied
/// unchanged to standard output. `#@CONTENT` inserts the whole source.
#[derive(Parser, Debug)]
#[command(name = "tmpl")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Template file to copy
    #[arg(value_name = "TEMPLATE_FILE")]
    pub template: PathBuf,

    /// Source file holding the named sections
    #[arg(value_name = "SOURCE_FILE")]
    pub source: PathBuf,

    /// Directive and section delimiter [default: #]
    #[arg(short = 's', long, value_name = "CHAR", env = "TMPL_DELIMITER")]
    pub delimiter: Option<char>,

    /// Reserved secondary marker (accepted, currently no effect)
    #[arg(short = 'h', long, value_name = "CHAR")]
    pub special: Option<char>,

    /// Match section names by shared prefix instead of exactly
    #[arg(long)]
    pub legacy_match: bool,

    /// Read the source once and look sections up in memory
    #[arg(long)]
    pub indexed: bool,

    /// Load settings from a TOML, JSON or YAML file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Builds the run configuration: defaults, then the config file, then flags.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigFile::load(path)?.apply(Config::default())?,
            None => Config::default(),
        };

        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter)?;
        }
        if self.special.is_some() {
            config = config.with_special(self.special);
        }
        if self.legacy_match {
            config = config.with_match_mode(MatchMode::Legacy);
        }
        if self.indexed {
            config = config.with_strategy(Strategy::Indexed);
        }
        Ok(config)
    }
}
