//! Annotated documents: prose with `__…__` zones whose words are glosses.
//!
//! Parsing runs two independent scans. [`split_markers`] cuts the raw text at
//! every `__`; [`split_words`] cuts the inside of a zone at runs of
//! punctuation and whitespace. Every piece either scan produces is kept, so
//! rendering the segments back with a faithful translation function gives the
//! input again, byte for byte.
//!
//! ```text
//! "hi __bear#PL, cat__!"
//!   level 1: "hi " "__" "bear#PL, cat" "__" "!"
//!   level 2: "bear#PL" ", " "cat"
//! ```

use logos::Logos;

use crate::config::ParseConfig;
use crate::gloss::{Gloss, GlossMode, parse_gloss};
use crate::traits::{Printer, ToTokens};
use crate::{Error, Location};

const MARKER: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Rendered verbatim.
    Literal(String),
    /// Rendered by the translation function.
    Translatable(Gloss),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Text {
    segments: Vec<Segment>,
}

impl Text {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        parse_text(raw)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn glosses(&self) -> impl Iterator<Item = &Gloss> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Translatable(gloss) => Some(gloss),
            Segment::Literal(_) => None,
        })
    }

    pub fn render<F>(&self, translate: F) -> String
    where
        F: FnMut(&Gloss) -> String,
    {
        render(translate, self)
    }
}

impl From<Vec<Segment>> for Text {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

/// Splits a zone into words and the punctuation/whitespace runs between them.
/// The two classes cover every character, so this lexer never fails.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum WordToken {
    #[regex(r#"[~`!@$%&()={}\\|;:'",<.>/? \t\n\r]+"#)]
    Gap,

    #[regex(r#"[^~`!@$%&()={}\\|;:'",<.>/? \t\n\r]+"#, allow_greedy = true)]
    Word,
}

/// Cut `raw` at every `__`, scanning left to right without overlap. The
/// markers are pieces too, so pieces alternate outside, marker, inside,
/// marker, outside; inside pieces sit at positions 2, 6, 10, …
///
/// Each piece comes with its byte offset in `raw`.
pub fn split_markers(raw: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for (start, marker) in raw.match_indices(MARKER) {
        pieces.push((last, &raw[last..start]));
        pieces.push((start, marker));
        last = start + marker.len();
    }
    pieces.push((last, &raw[last..]));
    pieces
}

/// Cut a zone into alternating word candidates (even positions) and
/// punctuation/whitespace runs (odd positions). Word candidates may be empty,
/// at the ends or when the zone is empty.
///
/// Each piece comes with its byte offset in `zone`.
pub fn split_words(zone: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut word_start = 0;
    for (token, span) in WordToken::lexer(zone).spanned() {
        if token == Ok(WordToken::Gap) {
            pieces.push((word_start, &zone[word_start..span.start]));
            pieces.push((span.start, &zone[span.clone()]));
            word_start = span.end;
        }
    }
    pieces.push((word_start, &zone[word_start..]));
    pieces
}

pub fn parse_text(raw: &str) -> Result<Text, Error> {
    parse_text_with(raw, &ParseConfig::DEFAULT)
}

/// Parse a document into segments.
///
/// Every non-empty word inside a zone is read as a gloss in implicit-pointers
/// mode. The first gloss that fails aborts the parse; the error displays as
/// the gloss parser's message and is located at the word's byte offset.
pub fn parse_text_with(raw: &str, config: &ParseConfig) -> Result<Text, Error> {
    let mut segments = Vec::new();
    for (position, (offset, piece)) in split_markers(raw).into_iter().enumerate() {
        if position % 4 != 2 {
            push(&mut segments, Segment::Literal(piece.to_owned()), config)?;
            continue;
        }
        for (word_position, (start, part)) in split_words(piece).into_iter().enumerate() {
            let segment = if word_position % 2 == 0 && !part.is_empty() {
                let gloss = parse_gloss(GlossMode::ImplicitPointers, part).map_err(|err| {
                    Error::from(err).with_location(Location::Offset(offset + start))
                })?;
                Segment::Translatable(gloss)
            } else {
                Segment::Literal(part.to_owned())
            };
            push(&mut segments, segment, config)?;
        }
    }
    Ok(Text { segments })
}

fn push(segments: &mut Vec<Segment>, segment: Segment, config: &ParseConfig) -> Result<(), Error> {
    if segments.len() >= config.max_segments {
        return Err(Error::SegmentLimitExceeded {
            consumed: segments.len() + 1,
            limit: config.max_segments,
        });
    }
    segments.push(segment);
    Ok(())
}

/// Render a document: literals as written, glosses through `translate`.
pub fn render<F>(translate: F, text: &Text) -> String
where
    F: FnMut(&Gloss) -> String,
{
    text.to_string_with(TextPrinter::new(translate))
}

/// A printer whose tokens are glosses, formatted by a translation function.
pub struct TextPrinter<F> {
    buf: String,
    translate: F,
}

impl<F> TextPrinter<F>
where
    F: FnMut(&Gloss) -> String,
{
    pub fn new(translate: F) -> Self {
        Self {
            buf: String::new(),
            translate,
        }
    }
}

impl<F> Printer for TextPrinter<F>
where
    F: FnMut(&Gloss) -> String,
{
    type Token = Gloss;

    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn into_string(self) -> String {
        self.buf
    }

    fn token(&mut self, gloss: &Gloss) {
        let translated = (self.translate)(gloss);
        self.word(&translated);
    }
}

impl<P: Printer<Token = Gloss>> ToTokens<P> for Segment {
    fn write(&self, p: &mut P) {
        match self {
            Segment::Literal(text) => p.word(text),
            Segment::Translatable(gloss) => p.token(gloss),
        }
    }
}

impl<P: Printer<Token = Gloss>> ToTokens<P> for Text {
    fn write(&self, p: &mut P) {
        self.segments.write(p);
    }
}
