//! Pool Storage
//!
//! Pools are loaded before accrual and saved after it. `PoolStore` is the
//! seam to the persistence layer; `InMemoryPoolStore` backs tests and
//! embedded use.
//!
//! `KillmailStore` keeps the killmails themselves, one record per kill id,
//! so what fed a pool can be looked up later.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use lib_killmail::Killmail;
use lib_types::{KillId, YearMonth};

use crate::errors::PoolResult;
use crate::types::Pool;

/// Trait for pool storage operations
pub trait PoolStore: Send + Sync {
    /// Get the pool for a period, if one was ever created
    fn load_pool(&self, period: YearMonth) -> PoolResult<Option<Pool>>;

    /// Insert or overwrite the pool for `pool.year_month`
    fn save_pool(&self, pool: &Pool) -> PoolResult<()>;

    /// Check if a pool exists for a period
    fn pool_exists(&self, period: YearMonth) -> PoolResult<bool> {
        Ok(self.load_pool(period)?.is_some())
    }
}

/// In-memory pool store
///
/// All data is lost on process termination.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPoolStore {
    pools: Arc<RwLock<HashMap<YearMonth, Pool>>>,
}

impl InMemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Periods with a stored pool, oldest first
    pub fn periods(&self) -> Vec<YearMonth> {
        let mut periods: Vec<YearMonth> = self.pools.read().keys().copied().collect();
        periods.sort();
        periods
    }

    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }
}

impl PoolStore for InMemoryPoolStore {
    fn load_pool(&self, period: YearMonth) -> PoolResult<Option<Pool>> {
        Ok(self.pools.read().get(&period).cloned())
    }

    fn save_pool(&self, pool: &Pool) -> PoolResult<()> {
        self.pools.write().insert(pool.year_month, pool.clone());
        Ok(())
    }
}

/// Trait for killmail record storage
pub trait KillmailStore: Send + Sync {
    /// Insert or overwrite each killmail under its kill id
    fn save_killmails(&self, killmails: &[Killmail]) -> PoolResult<()>;

    fn load_killmail(&self, kill_id: &KillId) -> PoolResult<Option<Killmail>>;
}

/// In-memory killmail store
#[derive(Clone, Debug, Default)]
pub struct InMemoryKillmailStore {
    killmails: Arc<RwLock<HashMap<KillId, Killmail>>>,
}

impl InMemoryKillmailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.killmails.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.killmails.read().is_empty()
    }
}

impl KillmailStore for InMemoryKillmailStore {
    fn save_killmails(&self, killmails: &[Killmail]) -> PoolResult<()> {
        let mut stored = self.killmails.write();
        for killmail in killmails {
            stored.insert(killmail.kill_id.clone(), killmail.clone());
        }
        Ok(())
    }

    fn load_killmail(&self, kill_id: &KillId) -> PoolResult<Option<Killmail>> {
        Ok(self.killmails.read().get(kill_id).cloned())
    }
}

/// One mutex per period.
///
/// Holding a period's lock across load, apply and save keeps concurrent
/// cycles from overwriting each other's accruals.
#[derive(Debug, Default)]
pub struct PeriodLocks {
    locks: Mutex<HashMap<YearMonth, Arc<Mutex<()>>>>,
}

impl PeriodLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock handle for a period, created on first use
    pub fn handle(&self, period: YearMonth) -> Arc<Mutex<()>> {
        self.locks.lock().entry(period).or_default().clone()
    }
}
