use std::time::Duration;

use tracing::warn;

use crate::http::DEFAULT_SEARCH_ENDPOINT;

pub const DEFAULT_TICK_MS: u64 = 33;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog search URL; `type` and `q` are appended to it.
    pub search_endpoint: String,
    /// Location the app opens on.
    pub start_path: String,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            start_path: String::from("/"),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tick_rate = match non_empty("SPOTUI_TICK_MS").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(ms)) if ms > 0 => Duration::from_millis(ms),
            Some(_) => {
                warn!("Ignoring invalid SPOTUI_TICK_MS, using {DEFAULT_TICK_MS}ms");
                defaults.tick_rate
            }
            None => defaults.tick_rate,
        };

        Self {
            search_endpoint: non_empty("SPOTUI_SEARCH_ENDPOINT").unwrap_or(defaults.search_endpoint),
            start_path: non_empty("SPOTUI_START_PATH").unwrap_or(defaults.start_path),
            tick_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(
            Config::default().search_endpoint,
            "https://api.spotify.com/v1/search"
        );
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("SPOTUI_SEARCH_ENDPOINT", "http://localhost:8080/search"),
            ("SPOTUI_START_PATH", "/queue"),
            ("SPOTUI_TICK_MS", "100"),
        ]);

        assert_eq!(cfg.search_endpoint, "http://localhost:8080/search");
        assert_eq!(cfg.start_path, "/queue");
        assert_eq!(cfg.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let cfg = config(&[
            ("SPOTUI_SEARCH_ENDPOINT", "  "),
            ("SPOTUI_TICK_MS", "fast"),
        ]);
        assert_eq!(cfg, Config::default());

        assert_eq!(
            config(&[("SPOTUI_TICK_MS", "0")]).tick_rate,
            Duration::from_millis(DEFAULT_TICK_MS)
        );
    }
}
