//! Pool Ledger
//!
//! Load, accrue, save for one period at a time. The ledger owns the
//! per-period locks so two accrual cycles for the same month never
//! interleave.

use std::sync::Arc;

use lib_killmail::Killmail;
use lib_types::{Coins, YearMonth};

use crate::accrual::{apply_killmails, BatchSummary};
use crate::errors::{PoolError, PoolResult};
use crate::policy::AccrualPolicy;
use crate::store::{PeriodLocks, PoolStore};
use crate::types::Pool;

/// Period-keyed accrual over a `PoolStore`
pub struct PoolLedger<S: PoolStore> {
    store: Arc<S>,
    locks: PeriodLocks,
    policy: AccrualPolicy,
    /// Balance given to a pool when it is created
    initial_balance: Coins,
}

impl<S: PoolStore> PoolLedger<S> {
    pub fn new(store: Arc<S>, policy: AccrualPolicy) -> Self {
        Self {
            store,
            locks: PeriodLocks::new(),
            policy,
            initial_balance: 0,
        }
    }

    pub fn with_initial_balance(mut self, balance: Coins) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Current state of a period's pool
    pub fn pool(&self, period: YearMonth) -> PoolResult<Option<Pool>> {
        self.store.load_pool(period)
    }

    /// Fold killmails into the period's pool, creating it if needed.
    ///
    /// Fails without saving if the pool is closed or storage fails.
    /// Individual killmail failures are counted in the summary.
    pub fn accrue(&self, period: YearMonth, killmails: &[Killmail]) -> PoolResult<BatchSummary> {
        let lock = self.locks.handle(period);
        let _guard = lock.lock();

        let mut pool = match self.store.load_pool(period)? {
            Some(pool) => pool,
            None => {
                tracing::info!(
                    "Opening reward pool for {} with balance {}",
                    period,
                    self.initial_balance
                );
                Pool::new(period, self.initial_balance)
            }
        };

        if !pool.is_open() {
            return Err(PoolError::Closed(period));
        }

        let summary = apply_killmails(&mut pool, killmails, &self.policy);
        self.store.save_pool(&pool)?;

        tracing::info!(
            "Accrued {} killmails into pool {} \
             ({} new players, {} duplicates, {} failed); claimed {}",
            summary.accrued(),
            period,
            summary.new_players,
            summary.duplicates,
            summary.failed,
            pool.claimed_coins
        );

        Ok(summary)
    }

    /// Close a period's pool so no further accruals land in it
    pub fn close(&self, period: YearMonth) -> PoolResult<bool> {
        let lock = self.locks.handle(period);
        let _guard = lock.lock();

        match self.store.load_pool(period)? {
            Some(mut pool) => {
                pool.close();
                self.store.save_pool(&pool)?;
                tracing::info!("Closed reward pool for {}", period);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
