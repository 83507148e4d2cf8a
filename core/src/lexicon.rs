//! The lexicon table: one lexeme per row, bound to columns by header name.
//!
//! Three columns are reserved (`id`, `translation`, `generator`) and may sit
//! anywhere in the header. Every other column is a user column, carried
//! through untouched and written back in the same place.

use std::collections::HashMap;
use std::iter;

use crate::config::{OverlongRows, ParseConfig};
use crate::gloss::{Gloss, GlossMode, parse_gloss, serialize_gloss};
use crate::table::{self, Row, is_empty_row};
use crate::{Error, Location};

/// Reserved columns in canonical order. Missing-column errors list names in
/// this order.
pub const REQUIRED_COLUMNS: [Column; 3] = [Column::Id, Column::Translation, Column::Generator];

/// A reserved column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Translation,
    Generator,
}

impl Column {
    /// The header name that selects this column.
    pub const fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Translation => "translation",
            Column::Generator => "generator",
        }
    }
}

/// Positions of the reserved columns in one header.
///
/// The same binding maps a row to a [`Lexeme`] and a lexeme back to a row, so
/// reading and writing cannot disagree about where a field lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBinding {
    indices: [usize; 3],
}

impl ColumnBinding {
    /// Look up each reserved column by name. The first occurrence wins; later
    /// duplicates are user columns.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Result<Self, Error> {
        let position =
            |column: Column| header.iter().position(|name| name.as_ref() == column.name());

        let mut indices = [0; 3];
        let mut missing = Vec::new();
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            match position(column) {
                Some(index) => *slot = index,
                None => missing.push(column.name()),
            }
        }

        if missing.is_empty() {
            Ok(Self { indices })
        } else {
            Err(Error::MissingHeaderColumns(missing))
        }
    }

    pub const fn index(&self, column: Column) -> usize {
        self.indices[column as usize]
    }

    /// The reserved column at `index`, or `None` for a user column.
    pub fn column_at(&self, index: usize) -> Option<Column> {
        REQUIRED_COLUMNS
            .into_iter()
            .find(|column| self.index(*column) == index)
    }

    /// Build a lexeme from a row already padded to the header width.
    fn bind(&self, row: Row) -> Result<Lexeme, Error> {
        let Row { line, cells } = row;
        let column = self.index(Column::Translation);
        let raw = cells.get(column).map_or("", String::as_str);
        let translation = parse_gloss(GlossMode::ImplicitLiterals, raw)
            .map_err(|err| Error::from(err).with_location(Location::Cell { line, column }))?;

        let mut id = String::new();
        let mut generator = String::new();
        let mut user_columns = Vec::with_capacity(cells.len().saturating_sub(REQUIRED_COLUMNS.len()));
        for (index, cell) in cells.into_iter().enumerate() {
            match self.column_at(index) {
                Some(Column::Id) => id = cell,
                Some(Column::Generator) => generator = cell,
                Some(Column::Translation) => {}
                None => user_columns.push(cell),
            }
        }

        Ok(Lexeme {
            id,
            translation,
            generator,
            user_columns,
        })
    }

    /// Lay a lexeme out as cells. The row is at least `width` wide and wider
    /// when the lexeme has more user values than the header has user columns.
    fn unbind(&self, lexeme: &Lexeme, width: usize) -> Vec<String> {
        let width = width.max(REQUIRED_COLUMNS.len() + lexeme.user_columns.len());
        let mut user_values = lexeme.user_columns.iter();
        (0..width)
            .map(|index| match self.column_at(index) {
                Some(Column::Id) => lexeme.id.clone(),
                Some(Column::Translation) => {
                    serialize_gloss(GlossMode::ImplicitLiterals, &lexeme.translation)
                }
                Some(Column::Generator) => lexeme.generator.clone(),
                None => user_values.next().cloned().unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    pub id: String,
    pub translation: Gloss,
    /// Name of the word-generator rule used to fill in a missing translation.
    pub generator: String,
    /// Values of the user columns, in header order, followed by any cells
    /// the row had past the end of the header.
    pub user_columns: Vec<String>,
}

impl Lexeme {
    pub fn with_translation(&self, translation: Gloss) -> Self {
        Self {
            translation,
            ..self.clone()
        }
    }

    /// A translation that is empty or starts with `?` is a placeholder the
    /// word generator may overwrite.
    pub fn needs_regeneration(&self) -> bool {
        let written = serialize_gloss(GlossMode::ImplicitLiterals, &self.translation);
        written.is_empty() || written.starts_with('?')
    }
}

/// Lexeme id to translation.
pub type LexiconIndex = HashMap<String, Gloss>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexicon {
    /// The header, verbatim.
    pub column_order: Vec<String>,
    pub lexemes: Vec<Lexeme>,
}

impl Lexicon {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        parse_lexicon(raw)
    }

    pub fn serialize(&self) -> Result<String, Error> {
        serialize_lexicon(self)
    }

    /// Map ids to translations. When an id repeats, the later row wins.
    pub fn index(&self) -> LexiconIndex {
        self.lexemes
            .iter()
            .map(|lexeme| (lexeme.id.clone(), lexeme.translation.clone()))
            .collect()
    }

    /// Replace every placeholder translation with `?` followed by a freshly
    /// generated word. `generate` receives the lexeme's generator rule name.
    pub fn regenerate<F>(self, mut generate: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let lexemes = self
            .lexemes
            .into_iter()
            .map(|lexeme| {
                if lexeme.needs_regeneration() {
                    let word = generate(&lexeme.generator);
                    Lexeme {
                        translation: Gloss::literal(format!("?{}", word)),
                        ..lexeme
                    }
                } else {
                    lexeme
                }
            })
            .collect();
        Self {
            column_order: self.column_order,
            lexemes,
        }
    }
}

pub fn parse_lexicon(raw: &str) -> Result<Lexicon, Error> {
    parse_lexicon_with(raw, &ParseConfig::DEFAULT)
}

/// Parse lexicon table text.
///
/// Blank lines are dropped wherever they appear. The first remaining row is
/// the header. Short rows are padded with empty cells. The first row whose
/// translation fails to parse fails the whole call; nothing partial is
/// returned.
pub fn parse_lexicon_with(raw: &str, config: &ParseConfig) -> Result<Lexicon, Error> {
    let mut rows = table::read_rows(raw)?
        .into_iter()
        .filter(|row| !is_empty_row(&row.cells));

    let header = rows.next().ok_or(Error::MissingHeaderRow)?;
    let binding = ColumnBinding::resolve(&header.cells)?;
    let width = header.cells.len();

    let lexemes = rows
        .enumerate()
        .map(|(index, mut row)| {
            if index >= config.max_rows {
                return Err(Error::RowLimitExceeded {
                    consumed: index + 1,
                    limit: config.max_rows,
                });
            }
            if row.cells.len() > width && config.overlong_rows == OverlongRows::Reject {
                return Err(Error::RowTooLong {
                    line: row.line,
                    found: row.cells.len(),
                    expected: width,
                });
            }
            if row.cells.len() < width {
                row.cells.resize(width, String::new());
            }
            binding.bind(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Lexicon {
        column_order: header.cells,
        lexemes,
    })
}

/// Write a lexicon back to table text: the header as stored, then one row
/// per lexeme with each field in its source column.
pub fn serialize_lexicon(lexicon: &Lexicon) -> Result<String, Error> {
    let binding = ColumnBinding::resolve(&lexicon.column_order)?;
    let width = lexicon.column_order.len();
    let body = lexicon
        .lexemes
        .iter()
        .map(|lexeme| binding.unbind(lexeme, width));
    table::write_rows(iter::once(lexicon.column_order.clone()).chain(body))
}
