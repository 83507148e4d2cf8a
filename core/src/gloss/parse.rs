use core::ops::Range;

use logos::Logos;

use super::{Gloss, GlossError, GlossErrorKind, GlossMode, GlossToken, Pointer};

type Spanned = (GlossToken, Range<usize>);

/// Parse one gloss.
///
/// The empty string is the empty literal in both modes. On failure the error
/// carries `token` verbatim so callers can show it to the author.
pub fn parse_gloss(mode: GlossMode, token: &str) -> Result<Gloss, GlossError> {
    GlossParser::lex(mode, token)
        .and_then(|mut parser| parser.gloss())
        .map_err(|kind| GlossError {
            token: token.to_owned(),
            kind,
        })
}

struct GlossParser<'src> {
    mode: GlossMode,
    source: &'src str,
    tokens: Vec<Spanned>,
    cursor: usize,
}

impl<'src> GlossParser<'src> {
    fn lex(mode: GlossMode, source: &'src str) -> Result<Self, GlossErrorKind> {
        let tokens = GlossToken::lexer(source)
            .spanned()
            .map(|(token, span)| match token {
                Ok(token) => Ok((token, span)),
                Err(()) => Err(lex_error(source, span)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            mode,
            source,
            tokens,
            cursor: 0,
        })
    }

    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn gloss(&mut self) -> Result<Gloss, GlossErrorKind> {
        let gloss = match self.next() {
            None => return Ok(Gloss::Literal(String::new())),
            Some((GlossToken::Bracketed(text), _)) => {
                self.refuse_features()?;
                Gloss::Literal(text)
            }
            Some((GlossToken::Star, span)) => {
                let id = self.word("a lexeme id", span.end)?;
                Gloss::Pointer(Pointer {
                    id,
                    features: self.features()?,
                })
            }
            Some((GlossToken::Word(word), _)) => match self.mode {
                GlossMode::ImplicitPointers => Gloss::Pointer(Pointer {
                    id: word,
                    features: self.features()?,
                }),
                GlossMode::ImplicitLiterals => {
                    self.refuse_features()?;
                    Gloss::Literal(word)
                }
            },
            Some((GlossToken::Hash, span)) => return Err(self.unexpected(span)),
        };
        self.ensure_consumed()?;
        Ok(gloss)
    }

    fn features(&mut self) -> Result<Vec<String>, GlossErrorKind> {
        let mut features = Vec::new();
        while let Some((GlossToken::Hash, span)) = self.peek() {
            let after = span.end;
            self.cursor += 1;
            features.push(self.word("a feature name", after)?);
        }
        Ok(features)
    }

    fn refuse_features(&self) -> Result<(), GlossErrorKind> {
        match self.peek() {
            Some((GlossToken::Hash, _)) => Err(GlossErrorKind::FeaturesOnLiteral),
            _ => Ok(()),
        }
    }

    /// `offset` is where the word should have started.
    fn word(&mut self, expect: &'static str, offset: usize) -> Result<String, GlossErrorKind> {
        match self.next() {
            Some((GlossToken::Word(word), _)) => Ok(word),
            Some((_, span)) => Err(GlossErrorKind::Expected {
                expect,
                offset: span.start,
            }),
            None => Err(GlossErrorKind::Expected { expect, offset }),
        }
    }

    fn ensure_consumed(&self) -> Result<(), GlossErrorKind> {
        match self.peek() {
            Some((_, span)) => Err(self.unexpected(span.clone())),
            None => Ok(()),
        }
    }

    fn unexpected(&self, span: Range<usize>) -> GlossErrorKind {
        GlossErrorKind::Unexpected {
            found: self.source.get(span.clone()).unwrap_or_default().to_owned(),
            offset: span.start,
        }
    }
}

fn lex_error(source: &str, span: Range<usize>) -> GlossErrorKind {
    let found = source.get(span.clone()).unwrap_or_default();
    if found.starts_with('[') {
        GlossErrorKind::UnterminatedLiteral { offset: span.start }
    } else {
        GlossErrorKind::Unexpected {
            found: found.to_owned(),
            offset: span.start,
        }
    }
}
