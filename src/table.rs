use crate::error::TableError;
use serde::Serialize;
use std::fmt;

/// A single untyped cell value.
///
/// Cells are stored exactly as inserted: no coercion between variants, no
/// null-filling. Serializes untagged, so a `Cell::Int(30)` becomes JSON `30`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Str(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl fmt::Display for Cell {
    /// Plain-text rendering used for delimited export. Null renders as an
    /// empty field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Str(s) => f.write_str(s),
        }
    }
}

/// Insertion-ordered mapping of column name to cell values.
///
/// Keys are unique; inserting an existing name replaces its values while
/// keeping the original position.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: Vec<(String, Vec<Cell>)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, C>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let name = name.into();
        let values: Vec<Cell> = values.into_iter().map(Into::into).collect();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}

impl<N: Into<String>, I: IntoIterator<Item = C>, C: Into<Cell>> FromIterator<(N, I)>
    for ColumnMap
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut map = ColumnMap::new();
        for (name, values) in iter {
            map.insert(name, values);
        }
        map
    }
}

/// Validated, row-oriented table. Column order follows the originating
/// [`ColumnMap`]'s insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cell at (`row`, `column` name), if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Converts a [`ColumnMap`] into a row-oriented [`Table`].
///
/// Every column must have the same number of values as the first column in
/// insertion order; the first column that disagrees fails the call with
/// [`TableError::LengthMismatch`] naming it and both lengths. An empty map
/// yields an empty table, not an error. Values are carried over verbatim.
pub fn normalize(columns: ColumnMap) -> Result<Table, TableError> {
    if columns.is_empty() {
        return Ok(Table::empty());
    }

    let expected = columns.columns[0].1.len();
    for (name, values) in columns.iter() {
        if values.len() != expected {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected,
                actual: values.len(),
            });
        }
    }

    let names: Vec<String> = columns.columns.iter().map(|(n, _)| n.clone()).collect();
    let mut rows: Vec<Vec<Cell>> = (0..expected)
        .map(|_| Vec::with_capacity(names.len()))
        .collect();
    for (_, values) in columns.columns {
        for (row, cell) in rows.iter_mut().zip(values) {
            row.push(cell);
        }
    }

    Ok(Table {
        columns: names,
        rows,
    })
}
