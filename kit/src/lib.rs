#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Lexicon and document formats for the au conlang translator.
//!
//! ```ignore
//! let lexicon = au::parse_lexicon(&std::fs::read_to_string("lexicon.csv")?)?;
//! let index = lexicon.index();
//! let text = au::parse_text("the word for bears is __bear#PL__!")?;
//! let out = text.render(|gloss| my_translator(&index, gloss));
//! ```
pub use au_core::*;
