//! Current-address resolution via the shared DNS resolver.

use std::sync::LazyLock;

use hickory_resolver::{
    config::{ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    TokioResolver,
};

/// Shared default DNS resolver.
///
/// On Unix/Windows this uses the host system configuration (e.g.
/// `/etc/resolv.conf`). If the system configuration cannot be loaded, it
/// falls back to Hickory's default upstream set (Google Public DNS).
static DEFAULT_RESOLVER: LazyLock<TokioResolver> = LazyLock::new(build_system_resolver);

/// Build a resolver using the host system DNS configuration (with fallback).
fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    let provider = TokioConnectionProvider::default();
    TokioResolver::builder_with_config(ResolverConfig::default(), provider)
        .with_options(ResolverOpts::default())
        .build()
}

/// Resolve the domain's current IPv4 address (first A record).
///
/// Returns `None` when resolution fails — rendered as "Unresolved" upstream.
pub async fn resolve_current_ip(domain: &str) -> Option<String> {
    match DEFAULT_RESOLVER.ipv4_lookup(domain).await {
        Ok(lookup) => lookup.iter().next().map(ToString::to_string),
        Err(e) => {
            log::warn!("Failed to resolve {domain}: {e}");
            None
        }
    }
}
