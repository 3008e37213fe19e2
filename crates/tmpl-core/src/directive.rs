//! Directive detection for template lines.
//!
//! A directive line has optional leading spaces or tabs, then the delimiter,
//! then a section name running up to the first whitespace:
//! ```text
//!   #intro
//! #@CONTENT
//! ```

use crate::config::Delimiter;

/// A directive found on a template line, borrowing the line's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    token: &'a [u8],
    name_start: usize,
}

impl<'a> Directive<'a> {
    /// The full token, delimiter included.
    pub fn token(&self) -> &'a [u8] {
        self.token
    }

    /// The section name: the token without its delimiter.
    pub fn name(&self) -> &'a [u8] {
        &self.token[self.name_start..]
    }

    /// The name as text, for diagnostics.
    pub fn display_name(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.name())
    }
}

/// Classifies a template line.
///
/// # Returns
/// `Some(Directive)` when the first character after leading spaces and tabs
/// is the delimiter, `None` otherwise. Empty and whitespace-only lines are
/// never directives.
///
/// # Example
/// ```
/// use tmpl_core::config::Delimiter;
/// use tmpl_core::directive::classify;
///
/// let delimiter = Delimiter::default();
/// let directive = classify(b"  #intro rest\n", &delimiter).unwrap();
/// assert_eq!(directive.token(), b"#intro");
/// assert_eq!(directive.name(), b"intro");
/// assert!(classify(b"plain text\n", &delimiter).is_none());
/// ```
pub fn classify<'a>(line: &'a [u8], delimiter: &Delimiter) -> Option<Directive<'a>> {
    let start = line
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t'))
        .unwrap_or(line.len());
    let rest = &line[start..];
    if !delimiter.begins(rest) {
        return None;
    }

    let name_start = delimiter.as_bytes().len();
    let end = name_start + token_len(&rest[name_start..]);
    Some(Directive {
        token: &rest[..end],
        name_start,
    })
}

/// The leading run of non-whitespace bytes in `bytes`.
pub fn leading_token(bytes: &[u8]) -> &[u8] {
    &bytes[..token_len(bytes)]
}

fn token_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(bytes.len())
}
