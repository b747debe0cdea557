//! Seam traits for the network-facing collaborators of the pipeline.

use async_trait::async_trait;

use crate::error::ReconResult;
use crate::types::{GeoInfo, RawRow};

/// Source of historical resolution rows for a domain.
///
/// Implementations collapse transport and parse failures into an empty
/// sequence — at this layer "no history exists" and "fetch failed" are not
/// distinguished, only logged.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch the raw history table rows for `domain`, in source order.
    async fn fetch_history(&self, domain: &str) -> Vec<RawRow>;
}

/// Geolocation lookup for a single validated IPv4 address.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Look up geolocation metadata for `address`.
    ///
    /// An `Err` means the lookup failed (transport error, non-success status,
    /// malformed payload, or a per-query failure flagged inside the payload);
    /// callers degrade to a placeholder rather than aborting.
    async fn lookup(&self, address: &str) -> ReconResult<GeoInfo>;
}
