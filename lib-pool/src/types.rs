//! Pool Types
//!
//! A `Pool` is the reward budget for one calendar month together with every
//! player's accrued balance for that month.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use lib_types::{CharacterId, Coins, KillId, YearMonth};

/// Lifecycle of a pool. Pools are created open on first accrual; closing is
/// done by the archival side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    #[default]
    Open,
    Closed,
}

/// One player's accrued balance within a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPlayer {
    pub character_id: CharacterId,
    /// Units earned this period
    pub coins: Coins,
    /// Killmails already folded into `coins`
    pub killmail_ids: HashSet<KillId>,
}

impl PoolPlayer {
    /// Player credited with a single killmail
    pub fn new(character_id: CharacterId, kill_id: KillId, coins: Coins) -> Self {
        Self {
            character_id,
            coins,
            killmail_ids: HashSet::from([kill_id]),
        }
    }

    pub fn has_killmail(&self, kill_id: &KillId) -> bool {
        self.killmail_ids.contains(kill_id)
    }
}

/// Reward pool for one accounting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub year_month: YearMonth,
    /// Funds available for distribution this period
    pub balance: Coins,
    /// Units already allocated to players, maintained incrementally
    pub claimed_coins: Coins,
    /// Players keyed by character
    pub players: HashMap<CharacterId, PoolPlayer>,
    #[serde(default)]
    pub status: PoolStatus,
}

impl Pool {
    /// Create an empty open pool
    pub fn new(year_month: YearMonth, balance: Coins) -> Self {
        Self {
            year_month,
            balance,
            claimed_coins: 0,
            players: HashMap::new(),
            status: PoolStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PoolStatus::Open
    }

    /// Stop accepting accruals
    pub fn close(&mut self) {
        self.status = PoolStatus::Closed;
    }

    pub fn has_player(&self, character_id: CharacterId) -> bool {
        self.players.contains_key(&character_id)
    }

    pub fn player(&self, character_id: CharacterId) -> Option<&PoolPlayer> {
        self.players.get(&character_id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
