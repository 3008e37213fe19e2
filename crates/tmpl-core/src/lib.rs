//! Directive-driven section splicing.
//!
//! Copies a template to the output line by line. A template line whose first
//! non-blank character is the delimiter (default `#`) is a directive; it is
//! replaced by the matching section of a source file instead of being echoed.
//!
//! ```text
//! template            source              output
//! --------            ------              ------
//! Hello               #greeting           Hello
//! #greeting           World               World
//! Bye                 #other              Bye
//!                     X
//! ```
//!
//! Two names are reserved: `@CONTENT` splices the whole source, and `@HEADER`
//! names the lines before the first boundary. Unknown names produce no output.
//!
//! # Lookup strategies
//!
//! - [`SectionExtractor`] rescans the source for every directive and rewinds it
//!   afterwards. This is the default.
//! - [`SectionIndex`] reads the source once and answers from memory.
//!
//! Both implement [`SectionSource`] and produce identical output for the same
//! [`Config`].

pub mod config;
pub mod constants;
pub mod directive;
pub mod error;
pub mod extract;
pub mod index;
pub mod scanner;
pub mod subst;

pub use config::{Config, ConfigFile, Delimiter, MatchMode, Strategy};
pub use constants::ReservedSection;
pub use directive::{Directive, classify};
pub use error::{Error, Result};
pub use extract::{Extraction, SectionExtractor, SectionSource};
pub use index::SectionIndex;
pub use scanner::LineScanner;
pub use subst::{RunSummary, Substitutor, substitute};
