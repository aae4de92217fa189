//! Killmail Record
//!
//! The parsed form of one upstream combat event. The upstream JSON layout is
//! owned by the feed adapter; this struct is what it hands over.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use lib_types::{CharacterId, Coins, KillId, SolarSystemId};

/// One combat event credited to a tracked character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Killmail {
    /// Upstream event id
    pub kill_id: KillId,
    /// Character the reward is credited to
    pub character_id: CharacterId,
    /// Reward units earned from this event
    pub points: Coins,
    /// Value of the loss; absent upstream means zero
    #[serde(default)]
    pub total_value: u64,
    /// Where the event happened
    pub solar_system_id: SolarSystemId,
    /// Group label of the losing side
    #[serde(default)]
    pub victim_group_name: String,
    /// Participants, in upstream order
    #[serde(default)]
    pub attacker_ids: Vec<CharacterId>,
}

impl Killmail {
    /// Create a killmail with no value, no victim group and no attackers
    pub fn new(
        kill_id: impl Into<KillId>,
        character_id: CharacterId,
        points: Coins,
        solar_system_id: SolarSystemId,
    ) -> Self {
        Self {
            kill_id: kill_id.into(),
            character_id,
            points,
            total_value: 0,
            solar_system_id,
            victim_group_name: String::new(),
            attacker_ids: Vec::new(),
        }
    }

    pub fn with_total_value(mut self, total_value: u64) -> Self {
        self.total_value = total_value;
        self
    }

    pub fn with_victim_group(mut self, name: impl Into<String>) -> Self {
        self.victim_group_name = name.into();
        self
    }

    pub fn with_attackers(mut self, attackers: impl IntoIterator<Item = CharacterId>) -> Self {
        self.attacker_ids = attackers.into_iter().collect();
        self
    }

    /// Number of distinct participants
    ///
    /// Upstream lists the same attacker more than once when they swapped
    /// ships mid-fight.
    pub fn distinct_attackers(&self) -> usize {
        self.attacker_ids.iter().collect::<HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_attackers_ignores_repeats() {
        let km = Killmail::new("k1", CharacterId::new(7), 10, SolarSystemId::new(1))
            .with_attackers([1, 2, 2, 3, 1].map(CharacterId::new));
        assert_eq!(km.attacker_ids.len(), 5);
        assert_eq!(km.distinct_attackers(), 3);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "kill_id": "k1",
            "character_id": 7,
            "points": 50,
            "solar_system_id": 30000142
        }"#;
        let km: Killmail = serde_json::from_str(json).unwrap();
        assert_eq!(km.total_value, 0);
        assert!(km.victim_group_name.is_empty());
        assert!(km.attacker_ids.is_empty());
    }
}
