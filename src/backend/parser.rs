use super::error::{Error, Result};
use super::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Unquoted,
    Quoted,
}

pub struct CsvParser;

impl CsvParser {
    /// Parses CSV text into a grid.
    ///
    /// Never fails. Malformed quoting is resolved by the state machine:
    /// a quote inside an unquoted field opens a quoted section, and an
    /// unterminated quote runs to the end of the input. `\n`, `\r\n` and a
    /// lone `\r` all end a row.
    pub fn parse(text: &str) -> Grid {
        let mut grid = Grid::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut state = State::Unquoted;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match state {
                State::Quoted => match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => state = State::Unquoted,
                    _ => field.push(c),
                },
                State::Unquoted => match c {
                    '"' => state = State::Quoted,
                    ',' => row.push(std::mem::take(&mut field)),
                    '\n' | '\r' => {
                        if c == '\r' && chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                        row.push(std::mem::take(&mut field));
                        grid.push_row(std::mem::take(&mut row));
                    }
                    _ => field.push(c),
                },
            }
        }

        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            grid.push_row(row);
        }

        tracing::trace!(rows = grid.num_rows(), "parsed csv text");
        grid
    }

    /// Parses raw bytes, rejecting anything that is not UTF-8 text.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Grid> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::not_text(format!("invalid UTF-8 at byte {}", e.valid_up_to())))?;
        Ok(Self::parse(text))
    }
}
