use super::{Gloss, GlossMode, GlossToken, Pointer, is_word};
use crate::traits::{Printer, ToTokens};

/// Serialize a gloss so that [`parse_gloss`](super::parse_gloss) in the same
/// mode reads it back.
pub fn serialize_gloss(mode: GlossMode, gloss: &Gloss) -> String {
    gloss.to_string_with(GlossPrinter::new(mode))
}

/// Prints glosses in the canonical spelling for one mode.
#[derive(Debug, Clone)]
pub struct GlossPrinter {
    buf: String,
    mode: GlossMode,
}

impl GlossPrinter {
    pub fn new(mode: GlossMode) -> Self {
        Self {
            buf: String::new(),
            mode,
        }
    }

    pub fn mode(&self) -> GlossMode {
        self.mode
    }

    fn bracketed(&mut self, text: &str) {
        self.char('[');
        for c in text.chars() {
            if matches!(c, '\\' | ']') {
                self.char('\\');
            }
            self.char(c);
        }
        self.char(']');
    }
}

impl Printer for GlossPrinter {
    type Token = GlossToken;

    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn into_string(self) -> String {
        self.buf
    }

    fn token(&mut self, t: &GlossToken) {
        match t {
            GlossToken::Star => self.char('*'),
            GlossToken::Hash => self.char('#'),
            GlossToken::Bracketed(text) => self.bracketed(text),
            GlossToken::Word(word) => self.word(word),
        }
    }
}

impl ToTokens<GlossPrinter> for Gloss {
    fn write(&self, p: &mut GlossPrinter) {
        match self {
            Gloss::Literal(text) => match p.mode() {
                GlossMode::ImplicitLiterals if text.is_empty() || is_word(text) => p.word(text),
                _ => p.bracketed(text),
            },
            Gloss::Pointer(pointer) => p.write(pointer),
        }
    }
}

impl ToTokens<GlossPrinter> for Pointer {
    fn write(&self, p: &mut GlossPrinter) {
        if p.mode() == GlossMode::ImplicitLiterals {
            p.token(&GlossToken::Star);
        }
        p.word(&self.id);
        for feature in &self.features {
            p.token(&GlossToken::Hash);
            p.word(feature);
        }
    }
}
