//! Output traits shared by the two formats.
//!
//! ```text
//! ToTokens<P> (value → text)
//!     └── Printer (buffer + token formatting)
//!           ├── GlossPrinter   Token = GlossToken
//!           └── TextPrinter<F> Token = Gloss, formatted by F
//! ```

mod printer;
mod to_tokens;

pub use printer::Printer;
pub use to_tokens::ToTokens;
