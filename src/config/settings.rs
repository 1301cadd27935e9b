//! Feed and ledger configuration settings and environment variable handling

use std::env;
use std::path::PathBuf;
use crate::series::WalkParams;

// Configuration constants
pub const DEFAULT_STORE_PATH: &str = "leads.csv";
pub const DEFAULT_LOG_DIR: &str = "output/logs";
pub const DEFAULT_MAX_SERIES_LENGTH: usize = 10_000;
pub const MAX_SERIES_LENGTH_CAP: usize = 1_000_000;

// Random walk constants, as fractions of the base price
pub const DEFAULT_VOLATILITY_PCT: f64 = 0.02;
pub const DEFAULT_CLOSE_NOISE_PCT: f64 = 0.005;
pub const DEFAULT_WICK_PCT: f64 = 0.01;
pub const DEFAULT_FLOOR_PCT: f64 = 0.01;
pub const MAX_VOLATILITY_PCT: f64 = 0.5;
/// Upper bound for any walk fraction.
pub const MAX_WALK_FRACTION: f64 = 1.0;
/// Keeps every generated price far below `f64::MAX`.
pub const MAX_BASE_PRICE: f64 = 1e15;

/// Ledger date column pattern, always UTC.
pub const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub access_token: Option<String>,
    pub log_dir: PathBuf,
    // Series generation
    pub walk: WalkParams,
    pub max_series_length: usize,
}

impl Config {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            access_token: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            walk: WalkParams::default(),
            max_series_length: DEFAULT_MAX_SERIES_LENGTH,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_walk_params(mut self, walk: WalkParams) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn with_max_series_length(mut self, max: usize) -> Self {
        self.max_series_length = max.clamp(1, MAX_SERIES_LENGTH_CAP);
        self
    }

    /// Reads the process environment. Call `dotenv` first if a `.env` file should apply.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let walk = WalkParams {
            volatility_pct: lookup("NEXUS_VOLATILITY_PCT")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_VOLATILITY_PCT)
                .clamp(0.0, MAX_VOLATILITY_PCT),
            floor_pct: lookup("NEXUS_FLOOR_PCT")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0 && *v < 1.0)
                .unwrap_or(DEFAULT_FLOOR_PCT),
            ..WalkParams::default()
        };

        Self {
            store_path: lookup("NEXUS_STORE_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            access_token: lookup("NEXUS_ACCESS_TOKEN").filter(|s| !s.is_empty()),
            log_dir: lookup("NEXUS_LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            walk,
            max_series_length: lookup("NEXUS_MAX_SERIES_LENGTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_SERIES_LENGTH)
                .clamp(1, MAX_SERIES_LENGTH_CAP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.access_token, None);
        assert_eq!(config.max_series_length, DEFAULT_MAX_SERIES_LENGTH);
        assert_eq!(config.walk.volatility_pct, DEFAULT_VOLATILITY_PCT);
        assert_eq!(config.walk.floor_pct, DEFAULT_FLOOR_PCT);
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("NEXUS_STORE_PATH", "/var/lib/nexus/leads.csv"),
            ("NEXUS_ACCESS_TOKEN", "s3cret"),
            ("NEXUS_VOLATILITY_PCT", "0.05"),
            ("NEXUS_MAX_SERIES_LENGTH", "250"),
        ]));
        assert_eq!(config.store_path, PathBuf::from("/var/lib/nexus/leads.csv"));
        assert_eq!(config.access_token.as_deref(), Some("s3cret"));
        assert_eq!(config.walk.volatility_pct, 0.05);
        assert_eq!(config.max_series_length, 250);
    }

    #[test]
    fn bad_values_fall_back_or_clamp() {
        let config = Config::from_lookup(lookup_from(&[
            ("NEXUS_VOLATILITY_PCT", "9.0"),
            ("NEXUS_FLOOR_PCT", "-1"),
            ("NEXUS_MAX_SERIES_LENGTH", "zero"),
            ("NEXUS_ACCESS_TOKEN", ""),
        ]));
        assert_eq!(config.walk.volatility_pct, MAX_VOLATILITY_PCT);
        assert_eq!(config.walk.floor_pct, DEFAULT_FLOOR_PCT);
        assert_eq!(config.max_series_length, DEFAULT_MAX_SERIES_LENGTH);
        assert_eq!(config.access_token, None);
    }
}
