// =============================================================================
// Aurora TA — Main Entry Point
// =============================================================================
//
// Loads the runtime config, analyses every instrument input file and prints
// the reports, most confident first, as pretty JSON on stdout.  Logs go to
// stderr through the tracing subscriber.
// =============================================================================

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aurora_ta::cache::AnalysisCache;
use aurora_ta::runner::run_all;
use aurora_ta::runtime_config::RuntimeConfig;

const DEFAULT_CONFIG_PATH: &str = "aurora_ta.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path =
        std::env::var("AURORA_TA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = RuntimeConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        RuntimeConfig::default()
    });

    // Override inputs from env if available.
    if let Ok(inputs) = std::env::var("AURORA_TA_INPUTS") {
        config.override_inputs(&inputs);
    }

    if config.inputs.is_empty() {
        warn!("No instrument inputs configured (set `inputs` or AURORA_TA_INPUTS)");
        return Ok(());
    }

    info!(
        inputs = config.inputs.len(),
        lookback_days = config.lookback_days,
        cache_ttl_secs = config.cache_ttl_secs,
        "Starting analysis run"
    );

    // ── 2. Analyse ───────────────────────────────────────────────────────
    let cache = Arc::new(AnalysisCache::new(config.cache_ttl()));
    let reports = run_all(Arc::new(config), cache).await;

    // ── 3. Emit ──────────────────────────────────────────────────────────
    let ranked: Vec<&aurora_ta::AnalysisReport> = reports.iter().map(Arc::as_ref).collect();
    let json = serde_json::to_string_pretty(&ranked).context("failed to serialise reports")?;
    println!("{json}");

    Ok(())
}
