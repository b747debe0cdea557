//! Block-structured report model.
//!
//! A report is an ordered sequence of [`ReportBlock`]s, each a coherent group
//! of label/value pairs: one "current status" summary block followed by one
//! block per distinct historical address (or a single no-history sentinel).
//! Exporters read block boundaries from [`BlockKind`] instead of re-deriving
//! grouping from cell text.

use serde::{Deserialize, Serialize};

use crate::types::{GeoInfo, HistoricalRecord, WhoisInfo};

/// Placeholder for values the upstream did not report.
const MISSING: &str = "-";

/// One label/value pair within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Row label.
    pub parameter: String,
    /// Row value.
    pub details: String,
}

impl ReportRow {
    /// Create a row from any string-like pair.
    #[must_use]
    pub fn new(parameter: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            details: details.into(),
        }
    }
}

/// What a block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockKind {
    /// The current-status summary.
    CurrentStatus,
    /// One historical address observation. `index` is 1-based and strictly
    /// increasing within a run.
    HistoricalRecord { index: u32 },
    /// Sentinel emitted when no usable history survived filtering and dedup.
    NoHistory,
}

/// One coherent group of report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBlock {
    /// Block classification, carrying the record index for historical blocks.
    pub kind: BlockKind,
    /// Ordered label/value rows.
    pub rows: Vec<ReportRow>,
}

/// Assemble the current-status block from the collaborator results.
///
/// Geolocation rows appear only when the lookup succeeded; registrar and
/// contact rows fall back to placeholders on WHOIS failure.
#[must_use]
pub fn build_current_status(
    domain: &str,
    current_ip: Option<&str>,
    geo: Option<&GeoInfo>,
    whois: Option<&WhoisInfo>,
) -> ReportBlock {
    let mut rows = vec![
        ReportRow::new("Target Domain", domain),
        ReportRow::new("Current IP", current_ip.unwrap_or("Unresolved")),
    ];

    if let Some(geo) = geo {
        rows.push(ReportRow::new("Location", location_line(geo)));
        rows.push(ReportRow::new("ISP", geo.isp.as_deref().unwrap_or(MISSING)));
        rows.push(ReportRow::new("ASN", geo.asn.as_deref().unwrap_or(MISSING)));
    }

    let registrar = whois
        .and_then(|w| w.registrar.as_deref())
        .unwrap_or("Hidden/Error");
    let email = whois
        .and_then(|w| w.emails.first())
        .map_or(MISSING, String::as_str);
    rows.push(ReportRow::new("Registrar", registrar));
    rows.push(ReportRow::new("Contact Email", email));

    ReportBlock {
        kind: BlockKind::CurrentStatus,
        rows,
    }
}

/// Assemble one historical block.
///
/// The first row is always the record-index marker so exporters can draw
/// sub-block boundaries without parsing values.
#[must_use]
pub fn historical_block(index: u32, record: &HistoricalRecord, geo: Option<&GeoInfo>) -> ReportBlock {
    let date = record.observed_date.as_deref().unwrap_or("unknown");
    let mut rows = vec![
        ReportRow::new(format!("--- RECORD #{index} ---"), format!("Date: {date}")),
        ReportRow::new("Detected IP", &record.address),
    ];

    match geo {
        Some(geo) => {
            rows.push(ReportRow::new("Old Location", location_line(geo)));
            rows.push(ReportRow::new(
                "Old ISP",
                geo.isp.as_deref().unwrap_or(MISSING),
            ));
            rows.push(ReportRow::new(
                "Old Org.",
                geo.org.as_deref().unwrap_or(MISSING),
            ));
        }
        None => rows.push(ReportRow::new("IP Info", "Location data unavailable")),
    }

    ReportBlock {
        kind: BlockKind::HistoricalRecord { index },
        rows,
    }
}

/// The sentinel block emitted when history yielded nothing usable.
#[must_use]
pub fn no_history_block() -> ReportBlock {
    ReportBlock {
        kind: BlockKind::NoHistory,
        rows: vec![ReportRow::new(
            "HISTORY",
            "No different historical 'A' records found.",
        )],
    }
}

/// Flatten the current block and the historical sequence into one row list
/// with section separators, as consumed by the console renderer.
#[must_use]
pub fn flatten_report(current: &ReportBlock, history: &[ReportBlock]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    rows.push(ReportRow::new("=== CURRENT STATUS ===", "---"));
    rows.extend(current.rows.iter().cloned());
    rows.push(ReportRow::new("=== HISTORICAL DATA ===", "---"));
    for block in history {
        rows.extend(block.rows.iter().cloned());
    }
    rows
}

fn location_line(geo: &GeoInfo) -> String {
    format!(
        "{} / {}",
        geo.city.as_deref().unwrap_or(MISSING),
        geo.country.as_deref().unwrap_or(MISSING)
    )
}
