//! Killmail Puller
//!
//! One pull cycle: for every registered character, fetch recent killmails,
//! keep the eligible ones, record them and fold them into the current
//! month's pool.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use lib_killmail::{filter_eligible, validate_killmail, Killmail};
use lib_pool::{BatchSummary, KillmailStore, PoolLedger, PoolStore};
use lib_types::{CharacterId, YearMonth};

use crate::config::PullerConfig;
use crate::source::{CharacterRegistry, KillmailSource};

/// What one pull cycle did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Users with a linked character
    pub characters: usize,
    /// Users skipped for lacking a character
    pub users_without_character: usize,
    /// Characters whose fetch failed
    pub fetch_failures: usize,
    /// Killmails returned by the source
    pub fetched: usize,
    /// Killmails passing the filter and boundary validation
    pub eligible: usize,
    /// Killmails passing the filter but failing validation
    pub invalid: usize,
    /// Eligible killmails that could not be recorded or accrued
    pub accrual_failures: usize,
    pub accrual: BatchSummary,
}

/// Pulls killmails and accrues them into pools
pub struct KillmailPuller<S: PoolStore> {
    registry: Arc<dyn CharacterRegistry>,
    source: Arc<dyn KillmailSource>,
    killmails: Arc<dyn KillmailStore>,
    ledger: PoolLedger<S>,
    config: PullerConfig,
    period: fn() -> YearMonth,
}

impl<S: PoolStore> KillmailPuller<S> {
    pub fn new(
        registry: Arc<dyn CharacterRegistry>,
        source: Arc<dyn KillmailSource>,
        pools: Arc<S>,
        killmails: Arc<dyn KillmailStore>,
        config: PullerConfig,
    ) -> Self {
        let ledger = PoolLedger::new(pools, config.policy)
            .with_initial_balance(config.initial_pool_balance);
        Self {
            registry,
            source,
            killmails,
            ledger,
            config,
            period: YearMonth::current,
        }
    }

    /// Override how the accrual period is chosen
    pub fn with_period_source(mut self, period: fn() -> YearMonth) -> Self {
        self.period = period;
        self
    }

    pub fn config(&self) -> &PullerConfig {
        &self.config
    }

    /// Regular pull over the short window
    pub async fn pull_recent(&self) -> Result<CycleReport> {
        self.pull(self.config.short_window()).await
    }

    /// Catch-up pull over the long window
    pub async fn pull_long(&self) -> Result<CycleReport> {
        self.pull(self.config.long_window()).await
    }

    /// Pull every registered character's killmails over `window`.
    ///
    /// A failing character is logged and skipped; only a registry failure
    /// aborts the cycle.
    pub async fn pull(&self, window: Duration) -> Result<CycleReport> {
        let users = self.registry.registered_users().await?;
        let mut report = CycleReport::default();

        for user in users {
            let Some(character_id) = user.character_id else {
                tracing::debug!("Skipping user {} without a character", user.login);
                report.users_without_character += 1;
                continue;
            };
            report.characters += 1;

            let killmails = match self.source.fetch_killmails(character_id, window).await {
                Ok(Some(killmails)) if !killmails.is_empty() => killmails,
                Ok(_) => {
                    tracing::debug!("No killmails for character {}", character_id);
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch killmails for character {}: {:#}",
                        character_id,
                        e
                    );
                    report.fetch_failures += 1;
                    continue;
                }
            };

            report.fetched += killmails.len();
            self.filter_and_accrue(character_id, killmails, &mut report);
        }

        tracing::info!(
            "Pull over {}s: {} characters, {} fetched, {} eligible, {} accrued, \
             {} fetch failures, {} accrual failures",
            window.as_secs(),
            report.characters,
            report.fetched,
            report.eligible,
            report.accrual.accrued(),
            report.fetch_failures,
            report.accrual_failures
        );

        Ok(report)
    }

    /// Filter, validate, record and accrue one character's killmails.
    ///
    /// The batch is recorded before it is accrued. A failure on either step
    /// counts the whole batch in `accrual_failures`; a later pull retries it.
    fn filter_and_accrue(
        &self,
        character_id: CharacterId,
        killmails: Vec<Killmail>,
        report: &mut CycleReport,
    ) {
        let eligible: Vec<Killmail> = filter_eligible(killmails, &self.config.filter)
            .into_iter()
            .filter(|killmail| match validate_killmail(killmail) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Dropping killmail: {}", e);
                    report.invalid += 1;
                    false
                }
            })
            .collect();

        if eligible.is_empty() {
            return;
        }
        report.eligible += eligible.len();

        let accrued = self
            .killmails
            .save_killmails(&eligible)
            .and_then(|()| self.ledger.accrue((self.period)(), &eligible));
        match accrued {
            Ok(summary) => report.accrual.merge(summary),
            Err(e) => {
                tracing::warn!(
                    "Failed to accrue killmails for character {}: {}",
                    character_id,
                    e
                );
                report.accrual_failures += eligible.len();
            }
        }
    }
}
