//! Killmail Reward Pools
//!
//! Monthly pools that accumulate per-player rewards from eligible killmails.
//!
//! # Key Rules
//!
//! 1. **One pool per month**: pools are keyed by `YearMonth` and created on
//!    first accrual
//! 2. **No double credit**: a killmail already recorded for a player never
//!    adds coins again
//! 3. **Incremental claims**: `claimed_coins` moves with every accrual
//!
//! # Usage
//!
//! ```ignore
//! use lib_pool::{apply_killmail, AccrualPolicy, Pool};
//!
//! let outcome = apply_killmail(&mut pool, &killmail, &AccrualPolicy::default())?;
//! ```

pub mod accrual;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod policy;
pub mod store;
pub mod types;

pub use accrual::{apply_killmail, apply_killmails, AccrualOutcome, BatchSummary};
pub use errors::{PoolError, PoolResult};
pub use invariants::{check_pool_invariants, claimed_drift, players_total, PoolInvariantViolation};
pub use ledger::PoolLedger;
pub use policy::{AccrualPolicy, DuplicateAccounting};
pub use store::{
    InMemoryKillmailStore, InMemoryPoolStore, KillmailStore, PeriodLocks, PoolStore,
};
pub use types::{Pool, PoolPlayer, PoolStatus};
