//! Reserved section names.

/// Section names with a fixed meaning in both templates and sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedSection {
    /// `@CONTENT`: splice the entire source file
    WholeFile,
    /// `@HEADER`: the lines before the first boundary line
    Preamble,
}

impl ReservedSection {
    /// Get the string representation of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WholeFile => "@CONTENT",
            Self::Preamble => "@HEADER",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl AsRef<str> for ReservedSection {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ReservedSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
