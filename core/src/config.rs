//! Parser configuration for resource limits and row-shape policy.
//!
//! This module provides [`ParseConfig`], shared by the lexicon parser and the
//! document tokenizer.
//!
//! # Example
//!
//! ```ignore
//! use au_core::config::ParseConfig;
//!
//! // Unlimited, over-long rows kept as extra user columns
//! let config = ParseConfig::default();
//!
//! // Untrusted input: cap the work and insist on well-shaped rows
//! let config = ParseConfig::new()
//!     .with_max_rows(10_000)
//!     .with_max_segments(100_000)
//!     .reject_overlong_rows();
//! ```

/// What the lexicon parser does with a data row that has more cells than the
/// header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlongRows {
    /// Keep the row. Cells past the header become trailing user-column
    /// values with no column name.
    #[default]
    Keep,
    /// Fail the parse with [`Error::RowTooLong`](crate::Error::RowTooLong).
    Reject,
}

/// Configuration for parser behavior and resource limits.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `max_rows` | `usize::MAX` | No limit by default |
/// | `max_segments` | `usize::MAX` | No limit by default |
/// | `overlong_rows` | [`OverlongRows::Keep`] | Lexicons written by hand often carry notes past the last column |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Maximum number of lexicon data rows (blank lines and the header do not
    /// count).
    ///
    /// Exceeding it fails with [`Error::RowLimitExceeded`](crate::Error::RowLimitExceeded).
    pub max_rows: usize,

    /// Maximum number of segments a document may produce.
    ///
    /// Exceeding it fails with
    /// [`Error::SegmentLimitExceeded`](crate::Error::SegmentLimitExceeded).
    pub max_segments: usize,

    /// Policy for rows longer than the header.
    pub overlong_rows: OverlongRows,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_rows: usize::MAX,
        max_segments: usize::MAX,
        overlong_rows: OverlongRows::Keep,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum number of lexicon data rows.
    #[inline]
    pub const fn with_max_rows(mut self, count: usize) -> Self {
        self.max_rows = count;
        self
    }

    /// Sets the maximum number of document segments.
    #[inline]
    pub const fn with_max_segments(mut self, count: usize) -> Self {
        self.max_segments = count;
        self
    }

    /// Sets the policy for rows longer than the header.
    #[inline]
    pub const fn with_overlong_rows(mut self, policy: OverlongRows) -> Self {
        self.overlong_rows = policy;
        self
    }

    /// Shorthand for `with_overlong_rows(OverlongRows::Reject)`.
    #[inline]
    pub const fn reject_overlong_rows(self) -> Self {
        self.with_overlong_rows(OverlongRows::Reject)
    }
}
