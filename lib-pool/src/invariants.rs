//! Pool accounting invariants.
//!
//! - **KeyMatchesPlayer**: each map key equals its player's `character_id`
//! - **ClaimedMatchesPlayers**: `claimed_coins == sum(player.coins)`
//!
//! The second one only holds unconditionally under
//! `DuplicateAccounting::SkipClaimed`. Under legacy accounting every
//! duplicate application opens a gap equal to its points; `claimed_drift`
//! reports that gap.

use lib_types::{CharacterId, Coins};

use crate::types::Pool;

/// A broken pool invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolInvariantViolation {
    KeyMismatch {
        key: CharacterId,
        character_id: CharacterId,
    },
    ClaimedMismatch {
        claimed_coins: Coins,
        players_total: Coins,
    },
}

impl PoolInvariantViolation {
    pub fn description(&self) -> String {
        match self {
            Self::KeyMismatch { key, character_id } => {
                format!("player stored under {key} has character id {character_id}")
            }
            Self::ClaimedMismatch {
                claimed_coins,
                players_total,
            } => format!(
                "claimed coins {claimed_coins} differ from players' total {players_total}"
            ),
        }
    }
}

/// Sum of all players' coins
pub fn players_total(pool: &Pool) -> Coins {
    pool.players
        .values()
        .fold(0, |total: Coins, player| total.saturating_add(player.coins))
}

/// How far `claimed_coins` has drifted from the players' total
pub fn claimed_drift(pool: &Pool) -> Coins {
    pool.claimed_coins.saturating_sub(players_total(pool))
}

/// Check every invariant, returning the first violation
pub fn check_pool_invariants(pool: &Pool) -> Result<(), PoolInvariantViolation> {
    for (key, player) in &pool.players {
        if *key != player.character_id {
            return Err(PoolInvariantViolation::KeyMismatch {
                key: *key,
                character_id: player.character_id,
            });
        }
    }

    let total = players_total(pool);
    if pool.claimed_coins != total {
        return Err(PoolInvariantViolation::ClaimedMismatch {
            claimed_coins: pool.claimed_coins,
            players_total: total,
        });
    }

    Ok(())
}
