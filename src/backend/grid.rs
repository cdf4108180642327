use super::parser::CsvParser;
use super::writer::CsvWriter;

/// An in-memory grid of CSV fields.
///
/// Rows may have different lengths. The parser never pads short rows;
/// only `set_cell` grows the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create from CSV text
    pub fn from_csv(csv_text: &str) -> Self {
        CsvParser::parse(csv_text)
    }

    /// Convert to CSV text
    pub fn to_csv(&self) -> String {
        CsvWriter::serialize(self)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub(crate) fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&String> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Cell text as the table shows it: missing cells of ragged rows read as "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.get_cell(row, col).map(String::as_str).unwrap_or("")
    }

    // ---- Editing operations ----

    /// Sets a cell, appending empty rows and empty fields as needed so the
    /// target position exists.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let r = &mut self.rows[row];
        if col >= r.len() {
            r.resize_with(col + 1, String::new);
        }
        r[col] = value.into();
    }

    /// Functional form of [`Grid::set_cell`].
    pub fn with_cell(mut self, row: usize, col: usize, value: impl Into<String>) -> Self {
        self.set_cell(row, col, value);
        self
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Vec<Vec<&str>>> for Grid {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        rows.into_iter()
            .map(|r| r.into_iter().map(str::to_string).collect())
            .collect::<Vec<Vec<String>>>()
            .into()
    }
}
