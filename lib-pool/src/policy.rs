//! Accrual Policy
//!
//! Knobs that change how `apply_killmail` accounts for a killmail.

use serde::{Deserialize, Serialize};

use lib_types::Coins;

/// How a duplicate killmail affects `claimed_coins`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAccounting {
    /// Duplicates still add their points to `claimed_coins`, matching how
    /// existing pools were accrued. `claimed_coins` then drifts above the
    /// players' total by the duplicates' points.
    #[default]
    Legacy,
    /// Duplicates leave `claimed_coins` untouched; it always equals the
    /// players' total.
    SkipClaimed,
}

/// Accrual rules applied to every killmail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualPolicy {
    pub duplicate_accounting: DuplicateAccounting,
    /// Upper bound on `claimed_coins`, if enforced
    pub budget_ceiling: Option<Coins>,
}

impl AccrualPolicy {
    /// Policy that keeps `claimed_coins` equal to the players' total
    pub fn strict() -> Self {
        Self {
            duplicate_accounting: DuplicateAccounting::SkipClaimed,
            budget_ceiling: None,
        }
    }

    pub fn with_budget_ceiling(mut self, ceiling: Coins) -> Self {
        self.budget_ceiling = Some(ceiling);
        self
    }

    pub(crate) fn counts_duplicates(&self) -> bool {
        self.duplicate_accounting == DuplicateAccounting::Legacy
    }
}
