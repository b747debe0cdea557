//! Heuristic row classification.
//!
//! The historical-record source does not guarantee a stable column order, so
//! extraction by column index is unreliable. Each cell is instead matched
//! against an ordered rule list by *content shape*: the first predicate that
//! matches claims the cell for its semantic slot.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::services::validate::is_valid_ipv4;
use crate::types::{HistoricalRecord, RecordType};

/// `YYYY-MM-DD` prefix, as emitted by the history source.
#[allow(clippy::unwrap_used)] // the pattern is a compile-time constant
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// Semantic slot a cell can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldSlot {
    Address,
    ObservedDate,
    RecordType,
}

fn looks_like_date(text: &str) -> bool {
    DATE_PREFIX.is_match(text)
}

fn is_record_type_token(text: &str) -> bool {
    RecordType::from_str(text).is_ok()
}

/// Ordered classification rules. Evaluated per cell, first match wins; cells
/// matching no rule are ignored.
const RULES: &[(fn(&str) -> bool, FieldSlot)] = &[
    (is_valid_ipv4, FieldSlot::Address),
    (looks_like_date, FieldSlot::ObservedDate),
    (is_record_type_token, FieldSlot::RecordType),
];

fn classify_cell(text: &str) -> Option<FieldSlot> {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(text))
        .map(|(_, slot)| *slot)
}

/// Classify one raw table row into a [`HistoricalRecord`].
///
/// Returns `None` when no cell holds a valid IPv4 address — such rows are
/// unusable. A missing date stays `None`; a missing record-type token
/// defaults to [`RecordType::Other`]. Type filtering is left to the caller.
#[must_use]
pub fn classify_row(cells: &[String]) -> Option<HistoricalRecord> {
    let mut address = None;
    let mut observed_date = None;
    let mut record_type = None;

    for cell in cells {
        let text = cell.trim();
        match classify_cell(text) {
            Some(FieldSlot::Address) => address = Some(text.to_string()),
            Some(FieldSlot::ObservedDate) => observed_date = Some(text.to_string()),
            Some(FieldSlot::RecordType) => record_type = RecordType::from_str(text).ok(),
            None => {}
        }
    }

    Some(HistoricalRecord {
        address: address?,
        observed_date,
        record_type: record_type.unwrap_or(RecordType::Other),
    })
}
