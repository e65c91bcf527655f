// =============================================================================
// Runtime Configuration — analysis settings with atomic save
// =============================================================================
//
// Every tunable of the runner lives here: the indicator windows, how many
// recent bars to analyse, the cache freshness window and the instrument
// input files.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry a serde default so that adding new fields never
// breaks loading an older config file.
//
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::IndicatorParams;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_lookback_days() -> usize {
    120
}

fn default_cache_ttl_secs() -> u64 {
    300
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration for the analysis runner.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Windows for every indicator in the catalogue.
    #[serde(default)]
    pub indicator_params: IndicatorParams,

    /// Number of most recent bars analysed per instrument.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: usize,

    /// Freshness window of the analysis cache, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Instrument input files (`{ "instrument", "bars", "sentiment"? }`).
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            indicator_params: IndicatorParams::default(),
            lookback_days: default_lookback_days(),
            cache_ttl_secs: default_cache_ttl_secs(),
            inputs: Vec::new(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            lookback_days = config.lookback_days,
            inputs = config.inputs.len(),
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise runtime config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "runtime config saved (atomic)");
        Ok(())
    }

    /// Replace `inputs` with a comma-separated list.  Blank entries are
    /// ignored; an all-blank list leaves `inputs` untouched.
    pub fn override_inputs(&mut self, raw: &str) {
        let inputs: Vec<PathBuf> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        if !inputs.is_empty() {
            self.inputs = inputs;
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
