//! Filter Configuration
//!
//! Home territory, fleet threshold and the organization's own group label.
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! own_group_name = "Brave Collective"
//! home_systems = [30004759, 30004760]
//! fleet_threshold = 19
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use lib_types::SolarSystemId;

use crate::errors::ConfigError;

/// Fleets of this many distinct attackers or more do not earn rewards
pub const DEFAULT_FLEET_THRESHOLD: usize = 19;

/// Group label of the tracked organization
pub const DEFAULT_OWN_GROUP_NAME: &str = "Brave Collective";

/// Configuration for killmail eligibility checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Victims in this group never earn rewards (exact, case-sensitive match)
    pub own_group_name: String,
    /// Systems counted as home territory. Empty means nothing is eligible.
    pub home_systems: HashSet<SolarSystemId>,
    /// Distinct attacker count at which a kill counts as a fleet kill
    pub fleet_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            own_group_name: DEFAULT_OWN_GROUP_NAME.to_string(),
            home_systems: HashSet::new(),
            fleet_threshold: DEFAULT_FLEET_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Default config with the given home systems
    pub fn with_home_systems(systems: impl IntoIterator<Item = SolarSystemId>) -> Self {
        Self {
            home_systems: systems.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            "Loaded filter config from {}: {} home systems, fleet threshold {}",
            path.display(),
            config.home_systems.len(),
            config.fleet_threshold
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet_threshold == 0 {
            return Err(ConfigError::InvalidFleetThreshold(self.fleet_threshold));
        }
        if self.home_systems.is_empty() {
            tracing::warn!("Filter config has no home systems; no killmail will be eligible");
        }
        Ok(())
    }

    pub fn is_home_system(&self, system: SolarSystemId) -> bool {
        self.home_systems.contains(&system)
    }
}
