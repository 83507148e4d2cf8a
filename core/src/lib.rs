#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Readers and writers for the two files an au project is made of.
//!
//! - The **lexicon** (`lexicon.csv`): a table binding lexeme ids to
//!   translations and word-generator rules, with any number of extra
//!   author-defined columns.
//! - **Documents** (`*.au`): prose in which `__…__` zones hold glosses to be
//!   replaced by translated words.
//!
//! Both formats round-trip: what parses can be written back unchanged.

pub mod config;
mod error;
pub mod gloss;
pub mod lexicon;
pub mod table;
pub mod text;
pub mod traits;

pub use config::{OverlongRows, ParseConfig};
pub use error::{Error, Location};
pub use gloss::{Gloss, GlossError, GlossErrorKind, GlossMode, Pointer, parse_gloss, serialize_gloss};
pub use lexicon::{
    Lexeme, Lexicon, LexiconIndex, parse_lexicon, parse_lexicon_with, serialize_lexicon,
};
pub use table::is_empty_row;
pub use text::{Segment, Text, parse_text, parse_text_with, render};
pub use traits::{Printer, ToTokens};
