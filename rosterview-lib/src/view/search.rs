//! Free-text search across columns.

use super::Column;
use crate::model::Record;

/// Returns `true` if any column's raw value contains `needle`.
///
/// `needle` must already be lower-cased.
fn matches_lowered(record: &Record, columns: &[Column], needle: &str) -> bool {
    columns.iter().any(|column| {
        column
            .raw_value(record)
            .to_display_string()
            .to_lowercase()
            .contains(needle)
    })
}

/// Returns `true` if the record matches the query in at least one column.
///
/// Matching is a case-insensitive substring test against the raw field
/// values, not the formatted cells. An empty query matches everything.
pub fn matches_query(record: &Record, columns: &[Column], query: &str) -> bool {
    query.is_empty() || matches_lowered(record, columns, &query.to_lowercase())
}

/// Keeps the records matching the query, in input order.
pub fn search<'a, I>(records: I, columns: &[Column], query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if query.is_empty() {
        return records;
    }

    let needle = query.to_lowercase();
    let before = records.len();
    let kept: Vec<&Record> = records
        .into_iter()
        .filter(|r| matches_lowered(r, columns, &needle))
        .collect();
    log::debug!("search {:?}: kept {} of {} records", query, kept.len(), before);
    kept
}
