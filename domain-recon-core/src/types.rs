//! Public types produced by the reconnaissance services.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One table row from the historical-record source, as its ordered cell texts.
pub type RawRow = Vec<String>;

/// DNS record type recognised in historical tables.
///
/// Only [`A`](Self::A) records carry an IPv4 address relevant to IP-history
/// reconstruction; the other variants are recognised so they can be filtered
/// out explicitly. Anything else maps to [`Other`](Self::Other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Unrecognised or absent record type.
    Other,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::Cname => write!(f, "CNAME"),
            Self::Mx => write!(f, "MX"),
            Self::Txt => write!(f, "TXT"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    /// Exact token match only — the classifier must not treat arbitrary cell
    /// text as a record type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            _ => Err(format!("Unknown record type token: {s}")),
        }
    }
}

/// One classified historical resolution, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    /// IPv4 address in textual form.
    pub address: String,
    /// Observation date (`YYYY-MM-DD` prefix); `None` when the source row
    /// carried no recognisable date.
    pub observed_date: Option<String>,
    /// Classified record type.
    pub record_type: RecordType,
}

/// Geolocation / network-ownership metadata for one address.
///
/// Absent fields mean the upstream did not report them — they are never
/// fabricated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    /// The queried IPv4 address.
    pub address: String,
    /// City name.
    pub city: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Internet service provider.
    pub isp: Option<String>,
    /// Organisation name.
    pub org: Option<String>,
    /// Autonomous system (e.g. `"AS15169 Google LLC"`).
    pub asn: Option<String>,
}

/// Parsed domain registration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisInfo {
    /// The queried domain name.
    pub domain: String,
    /// Domain registrar (e.g. `"Cloudflare, Inc."`).
    pub registrar: Option<String>,
    /// Contact email addresses found in the response.
    pub emails: Vec<String>,
}
