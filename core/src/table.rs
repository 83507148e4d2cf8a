//! Rows of raw string cells, read from and written to delimited table text.
//!
//! This is the only place that knows about CSV; the lexicon works on
//! [`Row`]s.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::Error;

/// One table record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line the record starts on.
    pub line: u64,
    pub cells: Vec<String>,
}

/// Tokenize table text into rows. Quoted cells may contain commas, quotes
/// and newlines; rows may differ in width.
pub fn read_rows(raw: &str) -> Result<Vec<Row>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    reader
        .records()
        .map(|record| -> Result<Row, Error> {
            let record = record?;
            Ok(Row {
                line: record.position().map_or(0, |pos| line_at(raw, pos.byte())),
                cells: record.iter().map(str::to_owned).collect(),
            })
        })
        .collect()
}

/// 1-based line of the record starting at `byte`. The reader skips blank
/// lines without counting them, and its byte offset may still point at the
/// line breaks before the record, so both are settled from the text itself.
fn line_at(raw: &str, byte: u64) -> u64 {
    let start = usize::try_from(byte).map_or(raw.len(), |byte| byte.min(raw.len()));
    let rest = raw.get(start..).unwrap_or_default();
    let breaks = rest.len() - rest.trim_start_matches(['\r', '\n']).len();
    let before = raw.get(..start + breaks).unwrap_or(raw);
    before.matches('\n').count() as u64 + 1
}

/// Write rows as table text, quoting cells where needed. Every record,
/// including the last, ends with `\n`.
pub fn write_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Result<String, Error>
where
    R: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Table(err.error().to_string()))?;
    String::from_utf8(bytes).map_err(|err| Error::Table(err.to_string()))
}

/// A row is blank when it is a single empty or whitespace-only cell, which is
/// what a blank line tokenizes to. A row of two or more cells is data, even if
/// every cell is blank: `,,` is three empty fields, not nothing.
pub fn is_empty_row<S: AsRef<str>>(cells: &[S]) -> bool {
    match cells {
        [only] => only.as_ref().trim().is_empty(),
        _ => false,
    }
}
