//! Command-line entry point for domain-recon.
//!
//! Resolves the target's current identity, reconciles its historical DNS
//! records, prints a combined console report, and optionally exports a styled
//! two-sheet spreadsheet.

mod export;
mod render;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use domain_recon_core::report::build_current_status;
use domain_recon_core::services::{normalize_domain, resolve_current_ip, whois_lookup};
use domain_recon_core::{GeoLookup, ReconPipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Passive reconnaissance for a domain: current identity, resolution history,
/// geolocation enrichment.
#[derive(Parser, Debug)]
#[command(name = "domain-recon", version, about)]
struct Cli {
    /// Target domain (prompted for when omitted)
    target: Option<String>,

    /// Save the report to <domain>.xlsx without asking
    #[arg(short, long, conflicts_with = "no_export")]
    export: bool,

    /// Never save a spreadsheet (skips the prompt)
    #[arg(short = 'n', long)]
    no_export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let target = match cli.target {
        Some(target) => target,
        None => prompt("Enter target domain (e.g., example.com): ")?,
    };
    let domain = normalize_domain(&target);
    anyhow::ensure!(!domain.is_empty(), "No target domain given");

    println!("\nStarting analysis for: {domain}\n");

    let pipeline = ReconPipeline::new_live();

    // Current status: resolution, registration, geolocation of the live address.
    let current_ip = resolve_current_ip(&domain).await;
    let whois = match whois_lookup(&domain).await {
        Ok(info) => Some(info),
        Err(e) => {
            log::warn!("WHOIS lookup failed for {domain}: {e}");
            None
        }
    };
    let geo_current = match current_ip.as_deref() {
        Some(ip) => pipeline.geo().lookup(ip).await.ok(),
        None => None,
    };
    let current = build_current_status(
        &domain,
        current_ip.as_deref(),
        geo_current.as_ref(),
        whois.as_ref(),
    );

    // Historical analysis: one rate-limited enrichment per distinct address.
    println!("Fetching historical records...");
    let history = pipeline
        .reconcile(&domain, current_ip.as_deref().unwrap_or_default())
        .await;
    println!("Analysis complete.\n");

    render::print_report(&current, &history);

    let filename = format!("{domain}.xlsx");
    let should_export = if cli.export {
        true
    } else if cli.no_export {
        false
    } else {
        confirm(&format!("\nSave results to '{filename}'? (Y/N): "))?
    };

    if should_export {
        export::write_workbook(Path::new(&filename), &current, &history)
            .with_context(|| format!("Failed to write '{filename}'"))?;
        println!("Report saved as '{filename}'");
    } else {
        println!("Export skipped.");
    }

    Ok(())
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn confirm(message: &str) -> anyhow::Result<bool> {
    let answer = prompt(message)?.to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes"))
}
