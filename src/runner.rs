// =============================================================================
// Runner — analyse every configured instrument input concurrently
// =============================================================================
//
// Input file layout:
//
//   { "instrument": "600519",
//     "bars": [ { "date": "2024-01-02", "open": .., "high": .., "low": ..,
//                 "close": .., "volume": .. }, ... ],
//     "sentiment": { "label": "positive", "score": 0.72, "count": 8 } }
//
// `sentiment` is optional and defaults to neutral.  Each input is analysed on
// a blocking worker; an input that cannot be read or whose bars are
// structurally invalid is logged and skipped.
// =============================================================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use futures_util::future::join_all;
use serde::Deserialize;
use tracing::{error, info};

use crate::analysis::{analyze, rank_by_confidence, AnalysisReport, NewsSentiment};
use crate::cache::{AnalysisCache, CacheKey};
use crate::market_data::{BarRecord, BarSeries};
use crate::runtime_config::RuntimeConfig;

/// One instrument's bars plus its pre-resolved sentiment.
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentInput {
    pub instrument: String,
    pub bars: Vec<BarRecord>,
    #[serde(default)]
    pub sentiment: NewsSentiment,
}

impl InstrumentInput {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read instrument input from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse instrument input from {}", path.display()))
    }
}

/// Analyse one input file, serving a fresh cached report when available.
pub fn analyze_input(
    path: &Path,
    config: &RuntimeConfig,
    cache: &AnalysisCache,
) -> Result<Arc<AnalysisReport>> {
    let input = InstrumentInput::load(path)?;
    let series = BarSeries::new(input.bars)
        .with_context(|| format!("invalid bar series for {}", input.instrument))?
        .tail(config.lookback_days);

    let key = CacheKey::new(input.instrument.clone(), config.lookback_days);
    Ok(cache.get_or_insert_with(key, || {
        analyze(
            input.instrument,
            &series,
            &config.indicator_params,
            &input.sentiment,
        )
    }))
}

/// Analyse every configured input concurrently and rank the results by
/// confidence.  Failed inputs are logged and left out.
pub async fn run_all(
    config: Arc<RuntimeConfig>,
    cache: Arc<AnalysisCache>,
) -> Vec<Arc<AnalysisReport>> {
    let tasks = config.inputs.iter().cloned().map(|path: PathBuf| {
        let config = Arc::clone(&config);
        let cache = Arc::clone(&cache);
        let task_path = path.clone();
        let handle = tokio::task::spawn_blocking(move || analyze_input(&task_path, &config, &cache));
        async move { (path, handle.await) }
    });

    let mut reports = Vec::with_capacity(config.inputs.len());
    for (path, outcome) in join_all(tasks).await {
        match outcome {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err(e)) => error!(path = %path.display(), error = %format!("{e:#}"), "input skipped"),
            Err(e) => error!(path = %path.display(), error = %e, "analysis task failed"),
        }
    }

    let evicted = cache.prune();
    rank_by_confidence(&mut reports);
    info!(
        analysed = reports.len(),
        requested = config.inputs.len(),
        evicted,
        "analysis run complete"
    );
    reports
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::analysis::Action;
    use crate::market_data::fixtures::{bars_from_closes, falling, rising};

    fn write_input(instrument: &str, closes: &[f64], sentiment: Option<&str>) -> PathBuf {
        let bars: Vec<BarRecord> = bars_from_closes(closes).into_iter().map(BarRecord::from).collect();
        let mut json = serde_json::json!({ "instrument": instrument, "bars": bars });
        if let Some(label) = sentiment {
            json["sentiment"] = serde_json::json!({ "label": label, "score": 0.8, "count": 5 });
        }
        let path = std::env::temp_dir().join(format!("aurora-ta-input-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, json.to_string()).unwrap();
        path
    }

    fn config(inputs: Vec<PathBuf>) -> Arc<RuntimeConfig> {
        Arc::new(RuntimeConfig {
            inputs,
            ..RuntimeConfig::default()
        })
    }

    #[test]
    fn input_without_sentiment_defaults_to_neutral() {
        let path = write_input("AAA", &rising(30), None);
        let input = InstrumentInput::load(&path).unwrap();
        assert_eq!(input.sentiment, NewsSentiment::default());
        assert_eq!(input.bars.len(), 30);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn lookback_trims_to_recent_bars() {
        let path = write_input("AAA", &rising(200), None);
        let cfg = config(vec![path.clone()]);
        let cache = AnalysisCache::new(Duration::from_secs(60));
        let report = analyze_input(&path, &cfg, &cache).unwrap();
        assert_eq!(report.bars, 120);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn cached_report_is_reused() {
        let path = write_input("AAA", &rising(40), None);
        let cfg = config(vec![path.clone()]);
        let cache = AnalysisCache::new(Duration::from_secs(60));
        let first = analyze_input(&path, &cfg, &cache).unwrap();
        let second = analyze_input(&path, &cfg, &cache).unwrap();
        assert_eq!(first.id, second.id);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn out_of_order_bars_fail_fast() {
        let path = write_input("BAD", &rising(30), None);
        let mut raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let bars = raw["bars"].as_array_mut().unwrap();
        bars.swap(0, 1);
        std::fs::write(&path, raw.to_string()).unwrap();

        let cache = AnalysisCache::new(Duration::from_secs(60));
        let err = analyze_input(&path, &config(vec![]), &cache).unwrap_err();
        assert!(format!("{err:#}").contains("invalid bar series for BAD"));
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn run_all_ranks_and_skips_failures() {
        let bull = write_input("BULL", &rising(60), Some("positive"));
        let bear = write_input("BEAR", &falling(60), Some("negative"));
        let missing = std::env::temp_dir().join("aurora-ta-does-not-exist.json");
        let cfg = config(vec![bear.clone(), missing, bull.clone()]);
        let cache = Arc::new(AnalysisCache::new(Duration::from_secs(60)));

        let reports = run_all(cfg, cache).await;
        let order: Vec<&str> = reports.iter().map(|r| r.instrument.as_str()).collect();
        assert_eq!(order, vec!["BULL", "BEAR"]);
        assert_eq!(reports[0].recommendation.action, Action::Buy);

        std::fs::remove_file(bull).unwrap();
        std::fs::remove_file(bear).unwrap();
    }
}
