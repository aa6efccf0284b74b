use crate::model::table::Row;
use csv::ReaderBuilder;

/// Splits RFC 4180 text into records. Records may have any width. A record
/// the reader cannot parse ends the import; everything read before it is
/// kept.
pub(super) fn split_quoted(raw: &str) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record.iter().map(str::to_string).collect()),
            Err(_) => break,
        }
    }
    records
}
