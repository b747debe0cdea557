//! IP geolocation lookup against ip-api.com.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{ReconError, ReconResult};
use crate::services::throttle::RatePolicy;
use crate::services::validate::is_valid_ipv4;
use crate::traits::GeoLookup;
use crate::types::GeoInfo;

/// Shared HTTP client for ip-api.com calls.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Per-request timeout for geolocation calls.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Response structure from the ip-api.com JSON endpoint.
///
/// The upstream signals per-query failures inside a 200-status body: `status`
/// is `"success"` or `"fail"`, with a `message` on failure.
#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    city: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    asn: Option<String>,
}

/// Rate-limited geolocation client.
///
/// The free ip-api.com tier throttles per-client request rate, so every call
/// waits out the injected [`RatePolicy`] first.
pub struct IpApiClient {
    policy: RatePolicy,
}

impl IpApiClient {
    /// Client with a custom rate policy.
    #[must_use]
    pub const fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }
}

impl Default for IpApiClient {
    fn default() -> Self {
        Self::new(RatePolicy::default())
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, address: &str) -> ReconResult<GeoInfo> {
        if !is_valid_ipv4(address) {
            return Err(ReconError::ValidationError(format!(
                "Not a valid IPv4 address: {address}"
            )));
        }

        self.policy.pause().await;

        let url =
            format!("http://ip-api.com/json/{address}?fields=status,message,country,city,isp,org,as");
        let response = HTTP_CLIENT
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .map_err(|e| ReconError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReconError::NetworkError(format!(
                "Geolocation service returned HTTP {status}"
            )));
        }

        let payload: IpApiResponse = response
            .json()
            .await
            .map_err(|e| ReconError::ParseError(format!("Failed to parse response: {e}")))?;

        if payload.status != "success" {
            return Err(ReconError::NetworkError(format!(
                "Lookup failed: {}",
                payload.message.as_deref().unwrap_or("no reason given")
            )));
        }

        Ok(GeoInfo {
            address: address.to_string(),
            city: payload.city,
            country: payload.country,
            isp: payload.isp,
            org: payload.org,
            asn: payload.asn,
        })
    }
}
