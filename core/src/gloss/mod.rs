//! Glosses: the annotation values written in lexicon cells and inside the
//! `__…__` zones of a document.
//!
//! A gloss is either a literal target-language string or a pointer to a
//! lexeme plus feature tags. The same text can mean either, depending on the
//! [`GlossMode`] it is read in:
//!
//! | written | implicit-literals | implicit-pointers |
//! |---------|-------------------|-------------------|
//! | `bär` | literal `bär` | pointer `bär` |
//! | `bear#PL` | error | pointer `bear` + `PL` |
//! | `*bear#PL` | pointer `bear` + `PL` | pointer `bear` + `PL` |
//! | `[big bear]` | literal `big bear` | literal `big bear` |
//! | (empty) | literal `""` | literal `""` |

mod lexer;
mod parse;
mod print;

use thiserror::Error;

pub use lexer::GlossToken;
pub use parse::parse_gloss;
pub use print::{GlossPrinter, serialize_gloss};

/// How a bare word is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum GlossMode {
    /// Bare words are literals. Used for the lexicon `translation` column.
    ImplicitLiterals,
    /// Bare words are pointers. Used inside document marked zones.
    ImplicitPointers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gloss {
    Literal(String),
    Pointer(Pointer),
}

/// A reference to a lexeme by id, with grammatical feature tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer {
    pub id: String,
    pub features: Vec<String>,
}

impl Gloss {
    /// A literal gloss. Serializes back to `text` in implicit-literals mode
    /// whenever `text` is empty or a single word.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn pointer<I, S>(id: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Pointer(Pointer {
            id: id.into(),
            features: features.into_iter().map(Into::into).collect(),
        })
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            Self::Pointer(_) => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&Pointer> {
        match self {
            Self::Pointer(pointer) => Some(pointer),
            Self::Literal(_) => None,
        }
    }
}

/// A gloss that could not be parsed, with the raw text it came from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse \"{token}\": {kind}")]
pub struct GlossError {
    pub token: String,
    pub kind: GlossErrorKind,
}

/// Offsets are byte offsets into the raw gloss text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossErrorKind {
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { found: String, offset: usize },

    #[error("unterminated literal at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("expected {expect} at offset {offset}")]
    Expected { expect: &'static str, offset: usize },

    #[error("features can only follow a pointer")]
    FeaturesOnLiteral,
}

/// Whether `text` can be written as a bare word.
pub(crate) fn is_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_word_char)
}

/// Mirrors the `Word` pattern of [`GlossToken`].
fn is_word_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '[' | ']' | '#' | '*' | '\\'))
}
