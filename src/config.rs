//! Configuration loading from environment variables.
//!
//! All values come from `PQUEUE_*` environment variables with sensible
//! defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `PQUEUE_CAPACITY` | 10 | Queue capacity (entries) |
//! | `PQUEUE_LOG_LEVEL` | info | Tracing filter directive |
//! | `PQUEUE_LOG_FORMAT` | pretty | `json` or `pretty` |
//! | `PQUEUE_LOG_FILE` | unset | Log file path (stderr when unset) |
//! | `PQUEUE_DEMO_ITEMS` | 10 | Payloads inserted by the demo driver |
//! | `PQUEUE_DEMO_MAX_PRIORITY` | 128 | Exclusive upper bound of demo priorities |

use std::path::PathBuf;

use crate::queue::QueueConfig;
use crate::telemetry::{LogConfig, LogFormat};

/// Settings for the demonstration driver.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub items: usize,
    pub max_priority: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { items: 10, max_priority: 128 }
    }
}

/// Flat summary of effective values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub capacity: usize,
    pub log_level: String,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    pub demo_items: usize,
    pub demo_max_priority: i32,
}

/// All configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub queue: QueueConfig,
    pub log: LogConfig,
    pub demo: DemoConfig,
}

/// Parse a `usize` env var, returning `default` on missing or invalid.
fn parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Parse an `i32` env var, returning `default` on missing or invalid.
fn parse_i32(key: &str, default: i32) -> i32 {
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<i32>().unwrap_or(default),
        Err(_) => default,
    }
}

fn load_queue_config() -> QueueConfig {
    let capacity = parse_usize("PQUEUE_CAPACITY", QueueConfig::default().capacity);
    QueueConfig { capacity: capacity.max(1) }
}

fn load_log_config() -> LogConfig {
    let defaults = LogConfig::default();
    let level = std::env::var("PQUEUE_LOG_LEVEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(defaults.level);
    let format = std::env::var("PQUEUE_LOG_FORMAT")
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or(defaults.format);
    let output_path = std::env::var("PQUEUE_LOG_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);
    LogConfig { format, level, output_path }
}

fn load_demo_config() -> DemoConfig {
    let defaults = DemoConfig::default();
    let items = parse_usize("PQUEUE_DEMO_ITEMS", defaults.items).max(1);
    let max_priority = parse_i32("PQUEUE_DEMO_MAX_PRIORITY", defaults.max_priority).max(1);
    DemoConfig { items, max_priority }
}

/// Load all configuration from environment variables.
pub fn load() -> EnvConfig {
    EnvConfig {
        queue: load_queue_config(),
        log: load_log_config(),
        demo: load_demo_config(),
    }
}

impl EnvConfig {
    pub fn effective_config(&self) -> EffectiveConfig {
        EffectiveConfig {
            capacity: self.queue.capacity,
            log_level: self.log.level.clone(),
            log_format: self.log.format,
            log_file: self.log.output_path.clone(),
            demo_items: self.demo.items,
            demo_max_priority: self.demo.max_priority,
        }
    }
}
