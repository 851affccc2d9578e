use std::fmt;

/// A formatted SQL statement produced by an external statement formatter.
///
/// The client treats the text as opaque: it is percent-encoded into the
/// `SQLQuery` field of the POST body and never interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SqlStatement(String);

impl SqlStatement {
    /// Wraps an already-formatted statement string.
    pub fn new(formatted: impl Into<String>) -> Self {
        Self(formatted.into())
    }

    /// Returns the formatted statement text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SqlStatement {
    fn from(formatted: String) -> Self {
        Self(formatted)
    }
}

impl From<&str> for SqlStatement {
    fn from(formatted: &str) -> Self {
        Self(formatted.to_owned())
    }
}
