use super::grid::Grid;

/// A value the writer can emit as a CSV field.
///
/// Absent values (`None`) are written as empty fields.
pub trait FieldText {
    fn field_text(&self) -> &str;
}

impl FieldText for String {
    fn field_text(&self) -> &str {
        self
    }
}

impl FieldText for &String {
    fn field_text(&self) -> &str {
        self
    }
}

impl FieldText for &str {
    fn field_text(&self) -> &str {
        self
    }
}

impl FieldText for Option<String> {
    fn field_text(&self) -> &str {
        self.as_deref().unwrap_or("")
    }
}

impl FieldText for Option<&str> {
    fn field_text(&self) -> &str {
        self.unwrap_or("")
    }
}

pub struct CsvWriter;

impl CsvWriter {
    /// Serializes a grid to CSV text.
    ///
    /// Rows are joined with `\n` whatever line endings the source had, and
    /// no newline follows the last row.
    pub fn serialize(grid: &Grid) -> String {
        Self::serialize_rows(grid.rows())
    }

    pub fn serialize_rows<I, R, F>(rows: I) -> String
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: FieldText,
    {
        let mut output = String::new();
        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            Self::write_row(&mut output, row);
        }
        output
    }

    fn write_row<R, F>(output: &mut String, row: R)
    where
        R: IntoIterator<Item = F>,
        F: FieldText,
    {
        for (i, field) in row.into_iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            Self::write_field(output, field.field_text());
        }
    }

    fn write_field(output: &mut String, field: &str) {
        if needs_quotes(field) {
            output.push('"');
            output.push_str(&field.replace('"', "\"\""));
            output.push('"');
        } else {
            output.push_str(field);
        }
    }
}

/// A field is quoted iff it holds a delimiter, a quote or a line break.
pub fn needs_quotes(field: &str) -> bool {
    field.contains([',', '"', '\n', '\r'])
}
