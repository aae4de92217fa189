//! Puller Configuration
//!
//! ```toml
//! poll_interval_secs = 3600
//! long_pull_interval_secs = 86400
//! short_window_hours = 1
//! long_window_hours = 168
//! initial_pool_balance = 0
//!
//! [filter]
//! home_systems = [30004759]
//!
//! [policy]
//! duplicate_accounting = "legacy"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lib_killmail::FilterConfig;
use lib_pool::AccrualPolicy;
use lib_types::Coins;

pub const HOUR: Duration = Duration::from_secs(60 * 60);
pub const WEEK: Duration = Duration::from_secs(24 * 7 * 60 * 60);

/// Configuration for scheduled pulls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullerConfig {
    pub filter: FilterConfig,
    pub policy: AccrualPolicy,
    /// Seconds between short pulls
    pub poll_interval_secs: u64,
    /// Seconds between long pulls
    pub long_pull_interval_secs: u64,
    /// How far back a short pull looks
    pub short_window_hours: u64,
    /// How far back a long pull looks
    pub long_window_hours: u64,
    /// Balance of a pool created by the puller
    pub initial_pool_balance: Coins,
}

impl Default for PullerConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            policy: AccrualPolicy::default(),
            poll_interval_secs: HOUR.as_secs(),
            long_pull_interval_secs: 24 * HOUR.as_secs(),
            short_window_hours: 1,
            long_window_hours: 24 * 7,
            initial_pool_balance: 0,
        }
    }
}

impl PullerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse puller config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read puller config {}", path.display()))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded puller config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.filter.validate()?;
        if self.poll_interval_secs == 0 || self.long_pull_interval_secs == 0 {
            anyhow::bail!("Pull intervals must be non-zero");
        }
        if self.short_window_hours == 0 || self.long_window_hours == 0 {
            anyhow::bail!("Pull windows must be non-zero");
        }
        for hours in [self.short_window_hours, self.long_window_hours] {
            if window_secs(hours).is_none() {
                anyhow::bail!("Pull window of {} hours is too long", hours);
            }
        }
        Ok(())
    }

    pub fn short_window(&self) -> Duration {
        Duration::from_secs(window_secs(self.short_window_hours).unwrap_or(u64::MAX))
    }

    pub fn long_window(&self) -> Duration {
        Duration::from_secs(window_secs(self.long_window_hours).unwrap_or(u64::MAX))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn long_pull_interval(&self) -> Duration {
        Duration::from_secs(self.long_pull_interval_secs)
    }
}

fn window_secs(hours: u64) -> Option<u64> {
    hours.checked_mul(HOUR.as_secs())
}
