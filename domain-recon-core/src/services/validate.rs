//! Input validation and normalisation helpers.

use std::net::Ipv4Addr;

/// Whether `text` is a well-formed IPv4 literal (four dot-separated octets,
/// each 0–255).
///
/// Used both to classify table cells and to guard enrichment — malformed
/// input must never reach the lookup service.
#[must_use]
pub fn is_valid_ipv4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

/// Reduce a user-supplied target to a bare domain name.
///
/// Strips an `http://`/`https://` scheme, a leading `www.`, and any path
/// suffix, then trims whitespace.
#[must_use]
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    without_www
        .split('/')
        .next()
        .unwrap_or(without_www)
        .to_string()
}
