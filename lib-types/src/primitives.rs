//! Primitive Types for Killmail Reward Accounting
//!
//! Identifiers are wrapped in newtypes so a character id can never be passed
//! where a solar system id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Reward units credited to players and claimed from a pool.
///
/// Signed: negative points are not rejected by the accrual core and simply
/// reduce totals.
pub type Coins = i64;

// ============================================================================
// IDENTIFIER TYPES
// ============================================================================

/// In-game character identifier
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl CharacterId {
    /// Create a new CharacterId
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CharacterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Solar system identifier
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SolarSystemId(pub u64);

impl SolarSystemId {
    /// Create a new SolarSystemId
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SolarSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SolarSystemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Killmail identifier as issued by the upstream feed
///
/// Kept opaque: upstream ids are numeric today but are compared only for
/// equality.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KillId(String);

impl KillId {
    /// Create a new KillId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KillId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for KillId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for KillId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id_basics() {
        let id = CharacterId::new(90_000_001);
        assert_eq!(id.get(), 90_000_001);
        assert_eq!(id, CharacterId::from(90_000_001));
        assert_eq!(id.to_string(), "90000001");
    }

    #[test]
    fn test_kill_id_from_number_matches_text() {
        assert_eq!(KillId::from(42u64), KillId::from("42"));
        assert_eq!(KillId::new("k1").as_str(), "k1");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&CharacterId::new(7)).unwrap();
        assert_eq!(json, "7");

        let kill: KillId = serde_json::from_str("\"k9\"").unwrap();
        assert_eq!(kill, KillId::from("k9"));
    }
}
