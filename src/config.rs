use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::difficulty::GradeThresholds;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid.
pub struct Config {
    /// Directory dated CSV exports are written to (KWSCOUT_EXPORT_DIR, default ".")
    pub export_dir: PathBuf,
    /// Directory for the content-addressed export cache (KWSCOUT_CACHE_DIR)
    pub cache_dir: PathBuf,
    /// Export cache size limit in files (KWSCOUT_CACHE_MAX_ENTRIES, default 64)
    pub cache_max_entries: usize,
    /// Grade bounds, overridable per threshold
    pub thresholds: GradeThresholds,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = GradeThresholds::default();
        let thresholds = GradeThresholds {
            golden_max: threshold_var("KWSCOUT_GOLDEN_MAX", defaults.golden_max)?,
            good_max: threshold_var("KWSCOUT_GOOD_MAX", defaults.good_max)?,
            caution_max: threshold_var("KWSCOUT_CAUTION_MAX", defaults.caution_max)?,
        };
        thresholds
            .validate()
            .context("invalid KWSCOUT_*_MAX threshold settings")?;

        let cache_max_entries = match env::var("KWSCOUT_CACHE_MAX_ENTRIES") {
            Ok(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("KWSCOUT_CACHE_MAX_ENTRIES='{raw}' is not a whole number")
            })?,
            Err(_) => crate::output::cache::DEFAULT_MAX_ENTRIES,
        };

        Ok(Self {
            export_dir: env::var("KWSCOUT_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            cache_dir: env::var("KWSCOUT_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_cache_dir()),
            cache_max_entries,
            thresholds,
        })
    }
}

/// `<platform cache dir>/kwscout`, or `./.kwscout-cache` if the platform has none.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("kwscout"))
        .unwrap_or_else(|| PathBuf::from(".kwscout-cache"))
}

fn threshold_var(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{name}='{raw}' is not a number")),
        Err(_) => Ok(default),
    }
}
