//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="json"
//! export PAGE_VIEW_QUEUE_CAPACITY="10000"
//! export SEED_FILE="./seed/page-views.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PAGE_VIEW_QUEUE_CAPACITY` - Page-view event buffer size (default: 10000, min: 100)
//! - `PAGE_VIEW_RETRY_ATTEMPTS` - Store retries per page view (default: 3, max: 10)
//! - `SEED_FILE` - JSON page-view dump imported at startup
//! - `MAX_AXIS_WEEKS` - Longest line-chart date axis served (default: 1040, max: 10000)
//! - `MAX_CHART_CELLS` - Largest line chart served, axis weeks times series
//!   (default: 1000000, min: 1000, max: 100000000)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::application::services::ChartLimits;
use crate::application::services::chart_limits::{DEFAULT_MAX_AXIS_WEEKS, DEFAULT_MAX_CHART_CELLS};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub page_view_queue_capacity: usize,
    /// Retries after the first failed store write of a page view.
    pub page_view_retry_attempts: usize,
    pub seed_file: Option<PathBuf>,
    pub max_axis_weeks: usize,
    pub max_chart_cells: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; ranges are checked
    /// by [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let page_view_queue_capacity = env::var("PAGE_VIEW_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let page_view_retry_attempts = env::var("PAGE_VIEW_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let seed_file = env::var("SEED_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let max_axis_weeks = env::var("MAX_AXIS_WEEKS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_AXIS_WEEKS);

        let max_chart_cells = env::var("MAX_CHART_CELLS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CHART_CELLS);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            page_view_queue_capacity,
            page_view_retry_attempts,
            seed_file,
            max_axis_weeks,
            max_chart_cells,
        })
    }

    /// Line-chart size limits enforced by the chart endpoints.
    pub fn chart_limits(&self) -> ChartLimits {
        ChartLimits {
            max_axis_weeks: self.max_axis_weeks,
            max_cells: self.max_chart_cells,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `page_view_queue_capacity` is outside `100..=1_000_000`
    /// - `page_view_retry_attempts` is greater than 10
    /// - `max_axis_weeks` is outside `1..=10_000`
    /// - `max_chart_cells` is outside `1_000..=100_000_000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.page_view_queue_capacity < 100 {
            anyhow::bail!(
                "PAGE_VIEW_QUEUE_CAPACITY must be at least 100, got {}",
                self.page_view_queue_capacity
            );
        }

        if self.page_view_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "PAGE_VIEW_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.page_view_queue_capacity
            );
        }

        if self.page_view_retry_attempts > 10 {
            anyhow::bail!(
                "PAGE_VIEW_RETRY_ATTEMPTS must be between 0 and 10, got {}",
                self.page_view_retry_attempts
            );
        }

        if !(1..=10_000).contains(&self.max_axis_weeks) {
            anyhow::bail!(
                "MAX_AXIS_WEEKS must be between 1 and 10000, got {}",
                self.max_axis_weeks
            );
        }

        if !(1_000..=100_000_000).contains(&self.max_chart_cells) {
            anyhow::bail!(
                "MAX_CHART_CELLS must be between 1000 and 100000000, got {}",
                self.max_chart_cells
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Page view queue capacity: {}",
            self.page_view_queue_capacity
        );
        tracing::info!(
            "  Page view retry attempts: {}",
            self.page_view_retry_attempts
        );
        tracing::info!(
            "  Chart limits: {} axis weeks, {} cells",
            self.max_axis_weeks,
            self.max_chart_cells
        );

        match self.seed_file {
            Some(ref path) => tracing::info!("  Seed file: {}", path.display()),
            None => tracing::info!("  Seed file: none"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "PAGE_VIEW_QUEUE_CAPACITY",
        "PAGE_VIEW_RETRY_ATTEMPTS",
        "SEED_FILE",
        "MAX_AXIS_WEEKS",
        "MAX_CHART_CELLS",
    ];

    fn clear_env() {
        // SAFETY: callers are #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            page_view_queue_capacity: 10_000,
            page_view_retry_attempts: 3,
            seed_file: None,
            max_axis_weeks: 1_040,
            max_chart_cells: 1_000_000,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.page_view_queue_capacity = 50;
        assert!(config.validate().is_err());

        config.page_view_queue_capacity = 2_000_000;
        assert!(config.validate().is_err());

        config.page_view_queue_capacity = 10_000;

        config.page_view_retry_attempts = 11;
        assert!(config.validate().is_err());

        config.page_view_retry_attempts = 0;
        assert!(config.validate().is_ok());

        config.max_axis_weeks = 0;
        assert!(config.validate().is_err());

        config.max_axis_weeks = 20_000;
        assert!(config.validate().is_err());

        config.max_axis_weeks = 52;
        assert!(config.validate().is_ok());

        config.max_chart_cells = 10;
        assert!(config.validate().is_err());

        config.max_chart_cells = 5_000;
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.page_view_queue_capacity, 10_000);
        assert_eq!(config.page_view_retry_attempts, 3);
        assert!(config.seed_file.is_none());
        assert_eq!(config.chart_limits(), ChartLimits::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("PAGE_VIEW_QUEUE_CAPACITY", "500");
            env::set_var("PAGE_VIEW_RETRY_ATTEMPTS", "not-a-number");
            env::set_var("SEED_FILE", "/tmp/page-views.json");
            env::set_var("MAX_AXIS_WEEKS", "520");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.page_view_queue_capacity, 500);
        assert_eq!(config.page_view_retry_attempts, 3);
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("/tmp/page-views.json"))
        );
        assert_eq!(config.chart_limits().max_axis_weeks, 520);
        assert_eq!(config.chart_limits().max_cells, 1_000_000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_invalid() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PAGE_VIEW_QUEUE_CAPACITY", "10");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_seed_file_is_ignored() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SEED_FILE", "  ");
        }

        assert!(Config::from_env().unwrap().seed_file.is_none());

        clear_env();
    }
}
