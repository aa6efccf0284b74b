//! Delimited-file ingestion: raw text in, [`Table`] out.
//!
//! Two formats are understood:
//!
//! - [`ImportFormat::Plain`]: every line is split on `,` with no quoting at
//!   all. A field can never contain a comma; this is a hard limitation of the
//!   format, not something the parser tries to repair.
//! - [`ImportFormat::Quoted`]: RFC 4180 style quoting handled by the `csv`
//!   crate, for files exported by spreadsheet tools.
//!
//! In both cases the first record becomes the header list (see
//! [`normalize_header`]) and every other record is kept verbatim. Ingestion
//! is total: ragged rows, empty input and invalid UTF-8 all produce a table,
//! never an error. Row widths are a display-time concern.

mod quoted;

use crate::model::table::{HeaderList, Row, Table};
use serde::{Deserialize, Serialize};

/// Line splitting strategy used by [`ingest_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportFormat {
    #[default]
    Plain,
    Quoted,
}

/// Normalizes a raw header cell: trims it, collapses each interior
/// whitespace run into a single `_` and lower-cases the result.
///
/// Normalizing an already normalized name returns it unchanged.
pub fn normalize_header(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Ingests plain comma-delimited text.
///
/// `ingest("")` yields a single empty header and no rows.
pub fn ingest(raw: &str) -> Table {
    ingest_with(raw, ImportFormat::Plain)
}

/// Ingests raw file bytes, replacing invalid UTF-8 sequences with U+FFFD.
pub fn ingest_bytes(bytes: &[u8], format: ImportFormat) -> Table {
    ingest_with(&String::from_utf8_lossy(bytes), format)
}

/// Ingests `raw` in the given format. A leading byte order mark is dropped.
pub fn ingest_with(raw: &str, format: ImportFormat) -> Table {
    let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);
    let records = match format {
        ImportFormat::Plain => split_plain(raw),
        ImportFormat::Quoted => quoted::split_quoted(raw),
    };
    into_table(records)
}

fn split_plain(raw: &str) -> Vec<Row> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

fn into_table(records: Vec<Row>) -> Table {
    let mut records = records.into_iter();
    let headers: HeaderList = match records.next() {
        Some(first) => first.iter().map(|cell| normalize_header(cell)).collect(),
        None => vec![String::new()],
    };
    Table::new(headers, records.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_text_gives_single_empty_header() {
        let table = ingest("");
        assert_eq!(table.headers, vec![String::new()]);
        assert!(table.rows.is_empty());
        assert!(table.is_blank());
    }

    #[test]
    fn headers_are_normalized_and_rows_kept_verbatim() {
        let table = ingest("Full Name,Phone\nAda,123\nGrace,456");
        assert_eq!(table.headers, strings(&["full_name", "phone"]));
        assert_eq!(
            table.rows,
            vec![strings(&["Ada", "123"]), strings(&["Grace", "456"])]
        );
    }

    #[test]
    fn data_cells_are_not_trimmed_or_lowercased() {
        let table = ingest("a\n  Mixed Case  ");
        assert_eq!(table.rows, vec![strings(&["  Mixed Case  "])]);
    }

    #[test]
    fn header_whitespace_runs_collapse_to_one_underscore() {
        assert_eq!(normalize_header("  First \t  Name  "), "first_name");
        assert_eq!(normalize_header("PHONE"), "phone");
        assert_eq!(normalize_header(""), "");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Full Name", " a  b\tc ", "already_normal", "ÉCOLE Ville", "", "x__y"] {
            let once = normalize_header(raw);
            assert_eq!(normalize_header(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn duplicate_headers_are_preserved_positionally() {
        let table = ingest("Name,name,NAME\n1,2,3");
        assert_eq!(table.headers, strings(&["name", "name", "name"]));
    }

    #[test]
    fn ragged_rows_pass_through() {
        let table = ingest("a,b,c\n1\n1,2,3,4");
        assert_eq!(table.rows, vec![strings(&["1"]), strings(&["1", "2", "3", "4"])]);
    }

    #[test]
    fn crlf_line_endings_are_split_cleanly() {
        let table = ingest("Name,Phone\r\nAda,123\r\n");
        assert_eq!(table.headers, strings(&["name", "phone"]));
        assert_eq!(table.rows, vec![strings(&["Ada", "123"]), strings(&[""])]);
    }

    #[test]
    fn plain_format_does_not_understand_quotes() {
        let table = ingest("name,city\n\"Lovelace, Ada\",London");
        assert_eq!(table.rows, vec![strings(&["\"Lovelace", " Ada\"", "London"])]);
    }

    #[test]
    fn quoted_format_keeps_commas_inside_quotes() {
        let table = ingest_with("Name,City\n\"Lovelace, Ada\",London\n", ImportFormat::Quoted);
        assert_eq!(table.headers, strings(&["name", "city"]));
        assert_eq!(table.rows, vec![strings(&["Lovelace, Ada", "London"])]);
    }

    #[test]
    fn quoted_format_tolerates_ragged_rows() {
        let table = ingest_with("a,b\n1\n1,2,3", ImportFormat::Quoted);
        assert_eq!(table.rows, vec![strings(&["1"]), strings(&["1", "2", "3"])]);
    }

    #[test]
    fn quoted_format_on_empty_text_matches_plain_shape() {
        assert_eq!(ingest_with("", ImportFormat::Quoted), ingest(""));
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_header() {
        let bytes = "\u{FEFF}Name,Phone\nAda,1".as_bytes();
        for format in [ImportFormat::Plain, ImportFormat::Quoted] {
            let table = ingest_bytes(bytes, format);
            assert_eq!(table.headers, strings(&["name", "phone"]), "{format:?}");
            assert_eq!(table.rows, vec![strings(&["Ada", "1"])], "{format:?}");
            assert_eq!(crate::template::preview("Hi {name}", &table), "Hi Ada");
        }
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let table = ingest_bytes(b"Name\n\xff\xfeAda", ImportFormat::Plain);
        assert_eq!(table.headers, strings(&["name"]));
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows[0][0].ends_with("Ada"));
        assert!(table.rows[0][0].contains('\u{FFFD}'));
    }
}
