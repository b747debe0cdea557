//! Mock implementations of the seam traits for pipeline tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ReconError, ReconResult};
use crate::traits::{GeoLookup, HistorySource};
use crate::types::{GeoInfo, RawRow};

// ===== MockHistorySource =====

pub struct MockHistorySource {
    rows: Vec<RawRow>,
}

impl MockHistorySource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl HistorySource for MockHistorySource {
    async fn fetch_history(&self, _domain: &str) -> Vec<RawRow> {
        self.rows.clone()
    }
}

// ===== MockGeoLookup =====

pub struct MockGeoLookup {
    /// Addresses whose lookup should fail, simulating transport errors.
    fail_for: HashSet<String>,
    /// Addresses looked up, in call order.
    looked_up: Mutex<Vec<String>>,
}

impl MockGeoLookup {
    pub fn new() -> Self {
        Self {
            fail_for: HashSet::new(),
            looked_up: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_for(mut self, address: &str) -> Self {
        self.fail_for.insert(address.to_string());
        self
    }

    #[allow(clippy::unwrap_used)]
    pub fn looked_up(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoLookup for MockGeoLookup {
    async fn lookup(&self, address: &str) -> ReconResult<GeoInfo> {
        #[allow(clippy::unwrap_used)]
        self.looked_up.lock().unwrap().push(address.to_string());

        if self.fail_for.contains(address) {
            return Err(ReconError::NetworkError("Request failed: mock".to_string()));
        }
        Ok(GeoInfo {
            address: address.to_string(),
            city: Some("Testville".to_string()),
            country: Some("Testland".to_string()),
            isp: Some("Mock ISP".to_string()),
            org: Some("Mock Org".to_string()),
            asn: Some("AS64496 Mock".to_string()),
        })
    }
}
