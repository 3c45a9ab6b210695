use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const COMMA: char = ',';
pub const QUOTE: char = '"';
pub const CR: char = '\r';
pub const LF: char = '\n';
pub const CRLF: &str = "\r\n";

/// Shared configuration of the parser and the writer.
///
/// The delimiter, the escape marker and the record separators (CR, LF) are
/// expected to be pairwise distinct. [`Builder::build`] does not check it,
/// the output for overlapping characters is unspecified; use
/// [`Builder::try_build`] or [`Options::validate`] to reject such a setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// The delimiter that separates fields.
    pub delimiter: char,
    /// The terminator written between records, never used when parsing.
    pub newline: String,
    /// The quotation character, escaped by doubling it.
    pub escape: char,
    /// Whether the last record is followed by a terminator.
    pub eof: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            delimiter: COMMA,
            newline: CRLF.to_string(),
            escape: QUOTE,
            eof: true,
        }
    }
}

impl Options {
    /// A builder starting from the defaults.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Reject a delimiter equal to the escape marker, a delimiter or escape
    /// marker that is CR or LF, an empty newline, and a newline holding the
    /// delimiter or the escape marker.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.escape {
            return Err(Error::DelimiterIsEscape(self.delimiter));
        }

        for &(role, ch) in &[("delimiter", self.delimiter), ("escape", self.escape)] {
            if ch == CR || ch == LF {
                return Err(Error::RecordSeparator { role, ch });
            }
            if self.newline.contains(ch) {
                return Err(Error::NewlineOverlap {
                    newline: self.newline.clone(),
                    role,
                    ch,
                });
            }
        }

        if self.newline.is_empty() {
            return Err(Error::EmptyNewline);
        }

        Ok(())
    }

    /// Whether `field` must be quoted to survive a round trip.
    #[inline]
    pub(crate) fn needs_escape(&self, field: &str) -> bool {
        field
            .chars()
            .any(|c| c == self.delimiter || c == self.escape || c == CR || c == LF)
    }
}

/// Overrides merged over a base configuration, the defaults unless
/// created with `Builder::from`.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    options: Options,
}

impl From<Options> for Builder {
    fn from(options: Options) -> Self {
        Builder { options }
    }
}

impl Builder {
    /// The merged options, unchecked.
    pub fn build(self) -> Options {
        self.options
    }

    /// The merged options, if they pass [`Options::validate`].
    pub fn try_build(self) -> Result<Options> {
        self.options.validate().map(|_| self.options)
    }

    /// The delimiter that separates fields.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// The terminator written between records.
    pub fn with_newline<S: Into<String>>(mut self, newline: S) -> Self {
        self.options.newline = newline.into();
        self
    }

    /// The character used to quote fields.
    pub fn with_escape(mut self, escape: char) -> Self {
        self.options.escape = escape;
        self
    }

    /// Whether to terminate the last record.
    pub fn with_eof(mut self, eof: bool) -> Self {
        self.options.eof = eof;
        self
    }
}
