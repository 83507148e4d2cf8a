//! Error types for the lexicon and document parsers.
//!
//! Every message a caller might show to an author is the `Display` text of
//! [`Error`]. Errors raised by the gloss parser are carried through unchanged;
//! where they happened is kept alongside as a [`Location`], never spliced into
//! the message.

use core::fmt;

use thiserror::Error;

use crate::gloss::GlossError;

/// Where in the input an error was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// A lexicon table cell: 1-based source line of the row and 0-based
    /// column index.
    Cell { line: u64, column: usize },
    /// A byte offset into a document.
    Offset(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Cell { line, column } => write!(f, "line {}, column {}", line, column),
            Location::Offset(offset) => write!(f, "offset {}", offset),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing header row")]
    MissingHeaderRow,

    /// Required columns absent from the header, in canonical order.
    #[error("missing header columns: {}", .0.join(", "))]
    MissingHeaderColumns(Vec<&'static str>),

    /// Only raised under [`OverlongRows::Reject`](crate::config::OverlongRows::Reject).
    #[error("row on line {line} has {found} cells but the header has {expected}")]
    RowTooLong {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("row limit exceeded: {consumed} > limit {limit}")]
    RowLimitExceeded { consumed: usize, limit: usize },

    #[error("segment limit exceeded: {consumed} > limit {limit}")]
    SegmentLimitExceeded { consumed: usize, limit: usize },

    /// Failure reported by the table tokenizer or writer.
    #[error("{0}")]
    Table(String),

    #[error(transparent)]
    Gloss(#[from] GlossError),

    /// An error with the position it was found at. Displays exactly as its
    /// source.
    #[error("{source}")]
    Located {
        #[source]
        source: Box<Error>,
        location: Location,
    },
}

impl Error {
    /// Attach a location, keeping the message untouched.
    pub fn with_location(self, location: Location) -> Self {
        Self::Located {
            source: Box::new(self),
            location,
        }
    }

    /// The outermost location attached to this error, if any.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Located { location, .. } => Some(location),
            _ => None,
        }
    }

    /// The error with every location wrapper stripped.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Self::Located { source, .. } = err {
            err = source;
        }
        err
    }

    /// The gloss parser failure behind this error, if that is what it is.
    pub fn as_gloss(&self) -> Option<&GlossError> {
        match self.root() {
            Self::Gloss(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Table(err.to_string())
    }
}
