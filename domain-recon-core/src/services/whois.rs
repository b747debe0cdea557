//! WHOIS registrar/contact lookup.

use std::sync::LazyLock;

use regex::Regex;
use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::error::{ReconError, ReconResult};
use crate::types::WhoisInfo;

/// Embedded WHOIS server mapping (TLD → server).
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

#[allow(clippy::unwrap_used)] // the pattern is a compile-time constant
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Query WHOIS for a domain and extract registrar and contact emails.
///
/// Registries disagree on field labels, so extraction tries multiple patterns
/// in order. Total failure is tolerated by callers (rendered as placeholders).
pub async fn whois_lookup(domain: &str) -> ReconResult<WhoisInfo> {
    let whois = WhoIs::from_string(WHOIS_SERVERS).map_err(|e| {
        ReconError::NetworkError(format!("Failed to initialize WHOIS client: {e}"))
    })?;

    let options = WhoIsLookupOptions::from_string(domain)
        .map_err(|e| ReconError::ValidationError(format!("Invalid domain: {e}")))?;

    let raw = whois
        .lookup_async(options)
        .await
        .map_err(|e| ReconError::NetworkError(format!("WHOIS query failed: {e}")))?;

    Ok(parse_whois_response(domain, &raw))
}

/// Parse registrar and contact emails from a raw WHOIS response.
fn parse_whois_response(domain: &str, raw: &str) -> WhoisInfo {
    WhoisInfo {
        domain: domain.to_string(),
        registrar: extract_field(
            raw,
            &[
                r"(?i)Registrar:\s*(.+)",
                r"(?i)Registrar Name:\s*(.+)",
                r"(?i)Sponsoring Registrar:\s*(.+)",
            ],
        ),
        emails: extract_emails(raw),
    }
}

/// Try multiple regex patterns and return the first match.
fn extract_field(text: &str, patterns: &[&str]) -> Option<String> {
    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(m) = re.captures(text).and_then(|caps| caps.get(1)) {
                let value = m.as_str().trim().to_string();
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Extract contact email addresses, lowercased and deduplicated.
fn extract_emails(text: &str) -> Vec<String> {
    let mut emails = Vec::new();
    for m in EMAIL.find_iter(text) {
        let email = m.as_str().to_lowercase();
        if !emails.contains(&email) {
            emails.push(email);
        }
    }
    emails
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== extract_field tests ====================

    #[test]
    fn test_extract_field_basic() {
        let text = "Registrar: Example Registrar Inc.";
        let result = extract_field(text, &[r"(?i)Registrar:\s*(.+)"]);
        assert_eq!(result, Some("Example Registrar Inc.".to_string()));
    }

    #[test]
    fn test_extract_field_fallback_pattern() {
        let text = "Sponsoring Registrar: Fallback Registrar";
        let result = extract_field(
            text,
            &[
                r"(?i)Registrar:\s*(.+)",
                r"(?i)Sponsoring Registrar:\s*(.+)",
            ],
        );
        assert_eq!(result, Some("Fallback Registrar".to_string()));
    }

    #[test]
    fn test_extract_field_no_match() {
        assert_eq!(extract_field("Nothing here", &[r"(?i)Registrar:\s*(.+)"]), None);
    }

    // ==================== extract_emails tests ====================

    #[test]
    fn test_extract_emails_basic() {
        let text = "Registrant Email: admin@example.com\nTech Email: tech@example.com";
        assert_eq!(
            extract_emails(text),
            vec!["admin@example.com", "tech@example.com"]
        );
    }

    #[test]
    fn test_extract_emails_dedup_case_insensitive() {
        let text = "Email: Admin@Example.com\nEmail: admin@example.com";
        assert_eq!(extract_emails(text), vec!["admin@example.com"]);
    }

    #[test]
    fn test_extract_emails_none() {
        assert!(extract_emails("no contacts disclosed").is_empty());
    }

    // ==================== parse_whois_response tests ====================

    #[test]
    fn test_parse_whois_response_full() {
        let raw = "Domain Name: EXAMPLE.COM\n\
                   Registrar: Example Registrar Inc.\n\
                   Registrar Abuse Contact Email: abuse@registrar.example\n";
        let info = parse_whois_response("example.com", raw);
        assert_eq!(info.domain, "example.com");
        assert_eq!(info.registrar, Some("Example Registrar Inc.".to_string()));
        assert_eq!(info.emails, vec!["abuse@registrar.example"]);
    }

    #[test]
    fn test_parse_whois_response_empty() {
        let info = parse_whois_response("unknown.tld", "");
        assert!(info.registrar.is_none());
        assert!(info.emails.is_empty());
    }

    // ==================== integration tests ====================

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_whois_lookup_real() {
        let info = whois_lookup("google.com").await.expect("lookup failed");
        assert_eq!(info.domain, "google.com");
        assert!(info.registrar.is_some());
    }
}
