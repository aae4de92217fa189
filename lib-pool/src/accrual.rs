//! Pool Accrual Logic
//!
//! `apply_killmail` is the canonical way to fold an eligible killmail into a
//! pool.
//!
//! # Rules
//!
//! 1. **Idempotent per player**: a killmail already recorded for its
//!    character never adds coins again
//! 2. **Lazy players**: the first killmail for a character creates its entry
//! 3. **Incremental claims**: `claimed_coins` is adjusted on every call, never
//!    recomputed from the players
//! 4. **No partial writes**: on error the pool is left untouched

use lib_killmail::Killmail;
use lib_types::Coins;

use crate::errors::{PoolError, PoolResult};
use crate::policy::AccrualPolicy;
use crate::types::{Pool, PoolPlayer};

/// What a single accrual did to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccrualOutcome {
    /// Created a player entry for an unseen character
    NewPlayer,
    /// Added points to an existing player
    Credited,
    /// Killmail already recorded for this player; coins unchanged
    DuplicateSkipped,
}

/// Tally of a batch application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub new_players: usize,
    pub credited: usize,
    pub duplicates: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: AccrualOutcome) {
        match outcome {
            AccrualOutcome::NewPlayer => self.new_players += 1,
            AccrualOutcome::Credited => self.credited += 1,
            AccrualOutcome::DuplicateSkipped => self.duplicates += 1,
        }
    }

    pub fn merge(&mut self, other: BatchSummary) {
        self.new_players += other.new_players;
        self.credited += other.credited;
        self.duplicates += other.duplicates;
        self.failed += other.failed;
    }

    /// Killmails that changed some player's coins
    pub fn accrued(&self) -> usize {
        self.new_players + self.credited
    }

    pub fn total(&self) -> usize {
        self.new_players + self.credited + self.duplicates + self.failed
    }
}

/// Apply one killmail to a pool
///
/// # Arguments
///
/// * `pool` - Pool for the killmail's period (mutated in place)
/// * `killmail` - An eligible killmail
/// * `policy` - Duplicate accounting and optional budget ceiling
///
/// # Returns
///
/// * `Ok(AccrualOutcome)` - What happened to the player entry
/// * `Err(PoolError)` - Pool closed, overflow, or ceiling exceeded
pub fn apply_killmail(
    pool: &mut Pool,
    killmail: &Killmail,
    policy: &AccrualPolicy,
) -> PoolResult<AccrualOutcome> {
    if !pool.is_open() {
        return Err(PoolError::Closed(pool.year_month));
    }

    let points = killmail.points;

    // =========================================================================
    // Decide the player transition without touching the pool
    // =========================================================================
    let (outcome, player_coins) = match pool.players.get(&killmail.character_id) {
        Some(player) if player.has_killmail(&killmail.kill_id) => {
            (AccrualOutcome::DuplicateSkipped, player.coins)
        }
        Some(player) => {
            let coins = player.coins.checked_add(points).ok_or(PoolError::Overflow)?;
            (AccrualOutcome::Credited, coins)
        }
        None => (AccrualOutcome::NewPlayer, points),
    };

    // =========================================================================
    // Claimed coins: duplicates count only under legacy accounting
    // =========================================================================
    let claim: Coins = match outcome {
        AccrualOutcome::DuplicateSkipped if !policy.counts_duplicates() => 0,
        _ => points,
    };
    let claimed_coins = pool
        .claimed_coins
        .checked_add(claim)
        .ok_or(PoolError::Overflow)?;

    if let Some(ceiling) = policy.budget_ceiling {
        if claim > 0 && claimed_coins > ceiling {
            return Err(PoolError::BudgetExceeded {
                ceiling,
                would_have: claimed_coins,
            });
        }
    }

    // =========================================================================
    // Commit
    // =========================================================================
    match outcome {
        AccrualOutcome::NewPlayer => {
            pool.players.insert(
                killmail.character_id,
                PoolPlayer::new(killmail.character_id, killmail.kill_id.clone(), points),
            );
        }
        AccrualOutcome::Credited => {
            if let Some(player) = pool.players.get_mut(&killmail.character_id) {
                player.coins = player_coins;
                player.killmail_ids.insert(killmail.kill_id.clone());
            }
        }
        AccrualOutcome::DuplicateSkipped => {
            tracing::debug!(
                kill_id = %killmail.kill_id,
                character_id = %killmail.character_id,
                "killmail already accrued for player"
            );
        }
    }
    pool.claimed_coins = claimed_coins;

    Ok(outcome)
}

/// Apply killmails one by one, in order.
///
/// A killmail that fails is logged and counted; earlier ones stay applied and
/// later ones are still attempted.
pub fn apply_killmails<'a, I>(pool: &mut Pool, killmails: I, policy: &AccrualPolicy) -> BatchSummary
where
    I: IntoIterator<Item = &'a Killmail>,
{
    let mut summary = BatchSummary::default();

    for killmail in killmails {
        match apply_killmail(pool, killmail, policy) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                tracing::warn!(
                    kill_id = %killmail.kill_id,
                    period = %pool.year_month,
                    "failed to accrue killmail: {}",
                    e
                );
                summary.failed += 1;
            }
        }
    }

    summary
}
