//! Passive domain reconnaissance core library.
//!
//! Resolves a domain's current network identity, scrapes historical DNS
//! resolutions from a third-party aggregator, enriches every distinct IPv4
//! address with geolocation/ISP metadata, and assembles an ordered,
//! block-structured report suitable for tabular display and spreadsheet
//! export.
//!
//! The fetch and enrichment seams are abstracted through traits so frontends
//! and tests can substitute their own sources.

pub mod error;
pub mod report;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ReconError, ReconResult};
pub use report::{BlockKind, ReportBlock, ReportRow};
pub use services::{IpApiClient, RapidDnsClient, RatePolicy, ReconPipeline};
pub use traits::{GeoLookup, HistorySource};
pub use types::{GeoInfo, HistoricalRecord, RawRow, RecordType, WhoisInfo};
