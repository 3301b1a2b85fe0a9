//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::SessionConfig;
use crate::types::{SAVE_INTERVAL_MS, SAVE_KEY, TICK_MS, TILE_COUNT};

/// Directory used for saved games when `SNAKE_SAVE_DIR` is unset.
pub const DEFAULT_SAVE_DIR: &str = ".tui-snake";

/// Default log filter when `SNAKE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u32,
    pub save_interval_ms: u32,
    /// `None` keeps saves in memory only.
    pub save_dir: Option<PathBuf>,
    pub muted: bool,
    /// `None` seeds from the clock.
    pub seed: Option<u32>,
    pub log_filter: String,
    /// `None` disables logging (the terminal belongs to the game).
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            save_interval_ms: SAVE_INTERVAL_MS,
            save_dir: Some(PathBuf::from(DEFAULT_SAVE_DIR)),
            muted: false,
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Like [`Config::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| {
            var(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = non_empty("SNAKE_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let save_interval_ms = non_empty("SNAKE_SAVE_INTERVAL_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.save_interval_ms);

        let save_disabled = non_empty("SNAKE_SAVE_DISABLED").is_some_and(|s| is_truthy(&s));
        let save_dir = if save_disabled {
            None
        } else {
            non_empty("SNAKE_SAVE_DIR")
                .map(PathBuf::from)
                .or(defaults.save_dir)
        };

        let muted = non_empty("SNAKE_MUTED").is_some_and(|s| is_truthy(&s));
        let seed = non_empty("SNAKE_SEED").and_then(|s| s.parse().ok());
        let log_filter = non_empty("SNAKE_LOG").unwrap_or(defaults.log_filter);
        let log_path = non_empty("SNAKE_LOG_PATH").map(PathBuf::from);

        Self {
            tick_ms,
            save_interval_ms,
            save_dir,
            muted,
            seed,
            log_filter,
            log_path,
        }
    }

    /// The seed to play with: the configured one, or one from the clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tick_ms: self.tick_ms,
            save_interval_ms: self.save_interval_ms,
            tile_count: TILE_COUNT,
            seed: self.resolve_seed(),
            muted: self.muted,
            save_key: SAVE_KEY.to_string(),
        }
    }
}

fn is_truthy(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
