//! Historical-record retrieval from the RapidDNS aggregator.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use scraper::{Html, Selector};

use crate::error::{ReconError, ReconResult};
use crate::traits::HistorySource;
use crate::types::RawRow;

/// The aggregator rejects or degrades requests without a browser-like UA.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Per-request timeout for history fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared HTTP client sending browser-like identification headers.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .build()
        .unwrap_or_default()
});

// Selector::parse only fails on invalid CSS; these are compile-time constants.
#[allow(clippy::unwrap_used)]
static RESULTS_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.table").unwrap());
#[allow(clippy::unwrap_used)]
static TABLE_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
#[allow(clippy::unwrap_used)]
static TABLE_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Client for the RapidDNS historical-record pages.
#[derive(Debug, Default)]
pub struct RapidDnsClient;

impl RapidDnsClient {
    /// Create a new client.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn fetch(&self, domain: &str) -> ReconResult<Vec<RawRow>> {
        let url = format!("https://rapiddns.io/s/{domain}");
        let response = HTTP_CLIENT
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReconError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Treated as "no history available", not an error.
            log::warn!("History source returned HTTP {status} for {domain}");
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReconError::NetworkError(format!("Failed to read response body: {e}")))?;

        Ok(extract_rows(&body))
    }
}

#[async_trait]
impl HistorySource for RapidDnsClient {
    /// Fetch the history table for `domain`.
    ///
    /// Transport failures collapse into an empty sequence — history absence is
    /// not distinguished from fetch failure at this layer, only logged.
    async fn fetch_history(&self, domain: &str) -> Vec<RawRow> {
        match self.fetch(domain).await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("History fetch failed for {domain}: {e}");
                Vec::new()
            }
        }
    }
}

/// Extract the data rows of the first results table in `html`.
///
/// The header row is skipped; each remaining row becomes its ordered, trimmed
/// cell texts. No table means no rows.
fn extract_rows(html: &str) -> Vec<RawRow> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&RESULTS_TABLE).next() else {
        return Vec::new();
    };

    table
        .select(&TABLE_ROW)
        .skip(1)
        .map(|row| {
            row.select(&TABLE_CELL)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect::<RawRow>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}
