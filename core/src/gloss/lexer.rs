use logos::Logos;

/// Tokens of the gloss grammar.
///
/// Whitespace is not a token: a gloss is a single word-like unit, so a space
/// anywhere is a lex error.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GlossToken {
    /// Explicit pointer sigil.
    #[token("*")]
    Star,

    /// Introduces a feature tag.
    #[token("#")]
    Hash,

    /// `[text]`, with `\]` and `\\` escapes. Holds the unescaped text.
    #[regex(r"\[([^\]\\]|\\.)*\]", |lex| unescape(lex.slice()))]
    Bracketed(String),

    #[regex(r"[^\s\[\]#*\\]+", |lex| lex.slice().to_owned(), allow_greedy = true)]
    Word(String),
}

fn unescape(slice: &str) -> String {
    let inner = slice
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(slice);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}
