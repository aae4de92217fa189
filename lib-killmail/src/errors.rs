//! Killmail Filtering Errors

use std::path::PathBuf;

use thiserror::Error;

use lib_types::{CharacterId, Coins, KillId, SolarSystemId};

/// Why a killmail was not eligible for reward accrual
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The tracked organization itself took the loss
    OwnGroupVictim { group: String },
    /// Outside the configured home systems
    OutsideHomeSystems { solar_system_id: SolarSystemId },
    /// Loss carried value
    NonZeroValue { total_value: u64 },
    /// Too many participants to attribute the kill
    FleetKill { attackers: usize, threshold: usize },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::OwnGroupVictim { group } => {
                write!(f, "victim belongs to own group {group:?}")
            }
            RejectReason::OutsideHomeSystems { solar_system_id } => {
                write!(f, "system {solar_system_id} is not a home system")
            }
            RejectReason::NonZeroValue { total_value } => {
                write!(f, "total value {total_value} is not zero")
            }
            RejectReason::FleetKill { attackers, threshold } => {
                write!(f, "{attackers} attackers reaches fleet threshold {threshold}")
            }
        }
    }
}

/// Boundary validation failure for an inbound killmail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KillmailError {
    #[error("Negative points {points} on killmail {kill_id} for character {character_id}")]
    NegativePoints {
        kill_id: KillId,
        character_id: CharacterId,
        points: Coins,
    },
}

/// Result type for killmail validation
pub type KillmailResult<T> = Result<T, KillmailError>;

/// Filter configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] toml::de::Error),

    #[error("Invalid fleet threshold: {0} (must be at least 1)")]
    InvalidFleetThreshold(usize),
}
