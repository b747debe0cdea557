//! Historical-record reconciliation pipeline.
//!
//! Orchestrates fetch → classify → filter-by-type → dedupe → enrich →
//! assemble. Strictly sequential: each record is enriched one at a time in
//! fetch order, so the dedupe set needs no coordination and the enrichment
//! rate limit is respected by construction.

use std::collections::HashSet;

use crate::report::{self, ReportBlock};
use crate::services::classify::classify_row;
use crate::services::geo::IpApiClient;
use crate::services::history::RapidDnsClient;
use crate::traits::{GeoLookup, HistorySource};
use crate::types::{HistoricalRecord, RecordType};

/// Reconciliation pipeline over pluggable history and geolocation sources.
pub struct ReconPipeline<H, G> {
    history: H,
    geo: G,
}

impl ReconPipeline<RapidDnsClient, IpApiClient> {
    /// Pipeline wired to the production sources (RapidDNS + ip-api.com with
    /// the default rate policy).
    #[must_use]
    pub fn new_live() -> Self {
        Self::new(RapidDnsClient::new(), IpApiClient::default())
    }
}

impl<H: HistorySource, G: GeoLookup> ReconPipeline<H, G> {
    /// Pipeline over explicit sources.
    #[must_use]
    pub const fn new(history: H, geo: G) -> Self {
        Self { history, geo }
    }

    /// The geolocation source, shared so callers can enrich the current
    /// address through the same rate policy.
    #[must_use]
    pub const fn geo(&self) -> &G {
        &self.geo
    }

    /// Reconcile the historical record set for `domain` into ordered report
    /// blocks.
    ///
    /// `current_address` seeds the seen-set so the domain's present address is
    /// never re-reported as history. Every failure degrades to a placeholder
    /// or the no-history sentinel; this method never errors.
    pub async fn reconcile(&self, domain: &str, current_address: &str) -> Vec<ReportBlock> {
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(current_address.to_string());

        let raw_rows = self.history.fetch_history(domain).await;
        if raw_rows.is_empty() {
            return vec![report::no_history_block()];
        }

        // Filtering happens before dedupe and before enrichment: only
        // address-mapping records enter the pipeline.
        let records: Vec<HistoricalRecord> = raw_rows
            .iter()
            .filter_map(|row| classify_row(row))
            .filter(|record| record.record_type == RecordType::A)
            .collect();

        log::info!(
            "Found {} historical A records for {domain} ({} raw rows)",
            records.len(),
            raw_rows.len()
        );

        let total = records.len();
        let mut blocks: Vec<ReportBlock> = Vec::new();
        let mut next_index: u32 = 1;

        for (position, record) in records.iter().enumerate() {
            // Stable dedupe: the first occurrence in source order wins.
            if !seen.insert(record.address.clone()) {
                continue;
            }

            log::info!(
                "Processing {} ({}/{total})",
                record.address,
                position + 1
            );

            let geo = match self.geo.lookup(&record.address).await {
                Ok(info) => Some(info),
                Err(e) => {
                    log::warn!("Geolocation lookup failed for {}: {e}", record.address);
                    None
                }
            };

            blocks.push(report::historical_block(next_index, record, geo.as_ref()));
            next_index += 1;
        }

        if blocks.is_empty() {
            return vec![report::no_history_block()];
        }
        blocks
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::BlockKind;
    use crate::test_utils::{MockGeoLookup, MockHistorySource};

    fn raw(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    fn pipeline(
        rows: Vec<Vec<String>>,
    ) -> ReconPipeline<MockHistorySource, MockGeoLookup> {
        ReconPipeline::new(MockHistorySource::new(rows), MockGeoLookup::new())
    }

    #[tokio::test]
    async fn test_empty_history_yields_single_sentinel() {
        let p = pipeline(Vec::new());
        let blocks = p.reconcile("example.com", "9.9.9.9").await;
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::NoHistory);
    }

    #[tokio::test]
    async fn test_dedupe_and_monotone_indices() {
        let p = pipeline(vec![
            raw(&["1.2.3.4", "2021-01-01", "A"]),
            raw(&["1.2.3.4", "2021-06-01", "A"]),
            raw(&["5.6.7.8", "2022-01-01", "A"]),
        ]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::HistoricalRecord { index: 1 });
        assert_eq!(blocks[1].kind, BlockKind::HistoricalRecord { index: 2 });
        // First occurrence wins: record #1 keeps the 2021-01-01 date.
        assert_eq!(blocks[0].rows[0].details, "Date: 2021-01-01");
        assert_eq!(blocks[0].rows[1].details, "1.2.3.4");
        assert_eq!(blocks[1].rows[1].details, "5.6.7.8");
    }

    #[tokio::test]
    async fn test_current_address_is_never_reported() {
        let p = pipeline(vec![
            raw(&["9.9.9.9", "2020-01-01", "A"]),
            raw(&["5.6.7.8", "2022-01-01", "A"]),
        ]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rows[1].details, "5.6.7.8");
    }

    #[tokio::test]
    async fn test_no_two_blocks_share_an_address() {
        let p = pipeline(vec![
            raw(&["1.2.3.4", "2021-01-01", "A"]),
            raw(&["5.6.7.8", "2021-02-01", "A"]),
            raw(&["1.2.3.4", "2021-03-01", "A"]),
            raw(&["5.6.7.8", "2021-04-01", "A"]),
        ]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        let mut addresses: Vec<&str> = blocks
            .iter()
            .map(|b| b.rows[1].details.as_str())
            .collect();
        addresses.sort_unstable();
        addresses.dedup();
        assert_eq!(addresses.len(), blocks.len());
    }

    #[tokio::test]
    async fn test_non_a_rows_are_discarded() {
        let p = pipeline(vec![raw(&["MX", "mail.example.com"])]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::NoHistory);
    }

    #[tokio::test]
    async fn test_cname_rows_with_address_are_filtered() {
        // A row can carry an address yet describe a non-A record.
        let p = pipeline(vec![
            raw(&["1.2.3.4", "2021-01-01", "CNAME"]),
            raw(&["5.6.7.8", "2022-01-01", "A"]),
        ]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rows[1].details, "5.6.7.8");
    }

    #[tokio::test]
    async fn test_all_rows_deduped_away_yields_sentinel() {
        let p = pipeline(vec![raw(&["9.9.9.9", "2020-01-01", "A"])]);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::NoHistory);
    }

    #[tokio::test]
    async fn test_enrichment_failure_does_not_abort_run() {
        let geo = MockGeoLookup::new().failing_for("1.2.3.4");
        let history = MockHistorySource::new(vec![
            raw(&["1.2.3.4", "2021-01-01", "A"]),
            raw(&["5.6.7.8", "2022-01-01", "A"]),
        ]);
        let p = ReconPipeline::new(history, geo);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        assert_eq!(blocks.len(), 2);
        // Failed record carries the placeholder row, not an aborted run.
        assert_eq!(blocks[0].rows[2].parameter, "IP Info");
        assert_eq!(blocks[0].rows[2].details, "Location data unavailable");
        // The next record was still enriched.
        assert_eq!(blocks[1].rows[2].parameter, "Old Location");
    }

    #[tokio::test]
    async fn test_enrichment_order_follows_source_order() {
        let geo = MockGeoLookup::new();
        let history = MockHistorySource::new(vec![
            raw(&["5.6.7.8", "2022-01-01", "A"]),
            raw(&["1.2.3.4", "2021-01-01", "A"]),
        ]);
        let p = ReconPipeline::new(history, geo);
        let blocks = p.reconcile("example.com", "9.9.9.9").await;

        let looked_up = p.geo().looked_up();
        assert_eq!(looked_up, vec!["5.6.7.8", "1.2.3.4"]);
        assert_eq!(blocks[0].rows[1].details, "5.6.7.8");
    }
}
