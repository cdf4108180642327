use csvflow::{CsvParser, CsvWriter, Grid};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ,\"\\r\\n\\té🦀]{0,8}").expect("valid field regex")
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(field_strategy(), 1..5), 0..6)
}

fn is_blank_row(row: &[String]) -> bool {
    row.len() == 1 && row[0].is_empty()
}

/// Grids that survive a round trip: a blank last row serializes to a
/// trailing newline, which the parser does not turn back into a row.
fn roundtrip_grid_strategy() -> impl Strategy<Value = Grid> {
    rows_strategy()
        .prop_filter("trailing blank row", |rows| {
            rows.last().is_none_or(|row| !is_blank_row(row))
        })
        .prop_map(Grid::from_rows)
}

/// Blank rows anywhere but the end serialize to an empty line and come
/// back as `[""]`, which writes out the same way again.
fn reserialization_grid_strategy() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec(field_strategy(), 0..5), 0..6)
        .prop_filter("trailing blank row", |rows| {
            rows.len() < 2 || rows.last().is_none_or(|row| !(row.is_empty() || is_blank_row(row)))
        })
        .prop_map(Grid::from_rows)
}

fn read_with_csv_crate(text: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parse_inverts_serialize(grid in roundtrip_grid_strategy()) {
        let text = CsvWriter::serialize(&grid);
        prop_assert_eq!(CsvParser::parse(&text), grid);
    }

    #[test]
    fn reserialization_is_idempotent(grid in reserialization_grid_strategy()) {
        let text = CsvWriter::serialize(&grid);
        let again = CsvWriter::serialize(&CsvParser::parse(&text));
        prop_assert_eq!(again, text);
    }

    #[test]
    fn serialized_fields_hide_line_breaks(grid in roundtrip_grid_strategy()) {
        let text = CsvWriter::serialize(&grid);
        let unquoted_breaks = text
            .split('"')
            .step_by(2)
            .map(|outside| outside.matches('\n').count())
            .sum::<usize>();
        prop_assert_eq!(unquoted_breaks, grid.num_rows().saturating_sub(1));
        prop_assert!(!text.ends_with('\n'));
    }

    #[test]
    fn parse_is_total(text in any::<String>()) {
        let grid = CsvParser::parse(&text);
        prop_assert!(grid.rows().iter().all(|row| !row.is_empty()));
        if text.is_empty() {
            prop_assert!(grid.is_empty());
        }
    }

    #[test]
    fn parse_is_total_on_csv_alphabet(text in "[a,\"\\r\\n\\x00]{0,24}") {
        let grid = CsvParser::parse(&text);
        prop_assert!(grid.rows().iter().all(|row| !row.is_empty()));
        let terminators = text.replace("\r\n", "\n").matches(['\n', '\r']).count();
        prop_assert!(grid.num_rows() <= terminators + 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn csv_crate_reads_serialized_output(
        rows in rows_strategy().prop_filter("csv skips blank lines", |rows| {
            rows.iter().all(|row| !is_blank_row(row))
        })
    ) {
        let text = CsvWriter::serialize(&Grid::from_rows(rows.clone()));
        let read = read_with_csv_crate(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(read, rows);
    }
}

#[test]
fn reserialization_keeps_inner_blank_rows() {
    let grid = Grid::from(vec![vec!["a"], vec![], vec![""], vec!["b"]]);
    let text = CsvWriter::serialize(&grid);
    assert_eq!(text, "a\n\n\nb");
    assert_eq!(CsvWriter::serialize(&CsvParser::parse(&text)), text);
}

#[test]
fn parser_agrees_with_csv_crate_on_well_formed_input() {
    let inputs = [
        "a,b\r\nc,d\r\n",
        "a,\"b,c\",d",
        "a,\"b\"\"c\",d",
        "a,b,c\nd,e\n",
        "a,b",
        "x\ry\rz",
        "\"multi\nline\",2\n3,\"\"\"quoted\"\"\"",
    ];
    for input in inputs {
        let expected = read_with_csv_crate(input).expect("well-formed csv");
        assert_eq!(CsvParser::parse(input).into_rows(), expected, "input: {:?}", input);
    }
}
