//! Killmail Eligibility
//!
//! A killmail earns a reward only if every check passes:
//!
//! 1. **Victim affiliation**: the victim is not in the organization's own group
//! 2. **Home system**: the kill happened in a configured home system
//! 3. **Empty pod**: the loss carried no value
//! 4. **Fleet size**: fewer distinct attackers than the fleet threshold
//!
//! Each check is exposed on its own so callers and tests can probe the exact
//! boundaries.

use crate::config::FilterConfig;
use crate::errors::{KillmailError, KillmailResult, RejectReason};
use crate::types::Killmail;

/// Result of an eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Killmail counts toward the pool
    Eligible,
    /// Killmail excluded, with the first failing check
    Rejected(RejectReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Victim is not a member of the tracked organization
pub fn is_victim_outsider(killmail: &Killmail, config: &FilterConfig) -> bool {
    killmail.victim_group_name != config.own_group_name
}

/// Kill happened inside home territory
pub fn is_in_home_system(killmail: &Killmail, config: &FilterConfig) -> bool {
    config.is_home_system(killmail.solar_system_id)
}

/// Loss carried no value.
///
/// Any non-zero `total_value` excludes the killmail, even though the name
/// reads as if empty pods were the ones excluded. Existing pools were accrued
/// with this rule, so it stays until the business owner says otherwise.
pub fn is_not_empty_pod(killmail: &Killmail) -> bool {
    killmail.total_value == 0
}

/// Fewer distinct attackers than the fleet threshold
pub fn is_not_in_fleet(killmail: &Killmail, config: &FilterConfig) -> bool {
    killmail.distinct_attackers() < config.fleet_threshold
}

/// Run all checks in order and report the first failure
pub fn check_eligibility(killmail: &Killmail, config: &FilterConfig) -> Eligibility {
    if !is_victim_outsider(killmail, config) {
        return Eligibility::Rejected(RejectReason::OwnGroupVictim {
            group: killmail.victim_group_name.clone(),
        });
    }

    if !is_in_home_system(killmail, config) {
        return Eligibility::Rejected(RejectReason::OutsideHomeSystems {
            solar_system_id: killmail.solar_system_id,
        });
    }

    if !is_not_empty_pod(killmail) {
        return Eligibility::Rejected(RejectReason::NonZeroValue {
            total_value: killmail.total_value,
        });
    }

    if !is_not_in_fleet(killmail, config) {
        return Eligibility::Rejected(RejectReason::FleetKill {
            attackers: killmail.distinct_attackers(),
            threshold: config.fleet_threshold,
        });
    }

    Eligibility::Eligible
}

/// True when every check passes
pub fn is_eligible(killmail: &Killmail, config: &FilterConfig) -> bool {
    check_eligibility(killmail, config).is_eligible()
}

/// Keep the eligible killmails, preserving order
pub fn filter_eligible<I>(killmails: I, config: &FilterConfig) -> Vec<Killmail>
where
    I: IntoIterator<Item = Killmail>,
{
    killmails
        .into_iter()
        .filter(|killmail| match check_eligibility(killmail, config) {
            Eligibility::Eligible => true,
            Eligibility::Rejected(reason) => {
                tracing::debug!(kill_id = %killmail.kill_id, %reason, "killmail rejected");
                false
            }
        })
        .collect()
}

/// Boundary check applied before accrual.
///
/// The accrual core adds points as given; negative points would drain a
/// player's balance, so the feed side refuses them here.
pub fn validate_killmail(killmail: &Killmail) -> KillmailResult<()> {
    if killmail.points < 0 {
        return Err(KillmailError::NegativePoints {
            kill_id: killmail.kill_id.clone(),
            character_id: killmail.character_id,
            points: killmail.points,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::{CharacterId, SolarSystemId};

    fn home_config() -> FilterConfig {
        FilterConfig::with_home_systems([SolarSystemId::new(1)])
    }

    fn attackers(count: u64) -> impl Iterator<Item = CharacterId> {
        (1..=count).map(CharacterId::new)
    }

    fn eligible_killmail() -> Killmail {
        Killmail::new("k1", CharacterId::new(7), 50, SolarSystemId::new(1))
            .with_victim_group("Other Group")
            .with_attackers(attackers(5))
    }

    // ---------------------------------------------------------------------
    // Victim affiliation
    // ---------------------------------------------------------------------

    #[test]
    fn test_victim_outsider_true() {
        let km = eligible_killmail().with_victim_group("notBrave");
        assert!(is_victim_outsider(&km, &home_config()));
    }

    #[test]
    fn test_victim_outsider_false_for_own_group() {
        let km = eligible_killmail().with_victim_group("Brave Collective");
        assert!(!is_victim_outsider(&km, &home_config()));
        assert_eq!(
            check_eligibility(&km, &home_config()),
            Eligibility::Rejected(RejectReason::OwnGroupVictim {
                group: "Brave Collective".to_string()
            })
        );
    }

    #[test]
    fn test_victim_group_match_is_case_sensitive() {
        let km = eligible_killmail().with_victim_group("brave collective");
        assert!(is_victim_outsider(&km, &home_config()));
        assert!(is_eligible(&km, &home_config()));
    }

    // ---------------------------------------------------------------------
    // Home system
    // ---------------------------------------------------------------------

    #[test]
    fn test_in_home_system_true() {
        assert!(is_in_home_system(&eligible_killmail(), &home_config()));
    }

    #[test]
    fn test_in_home_system_false() {
        let config = FilterConfig::with_home_systems([SolarSystemId::new(2)]);
        assert!(!is_in_home_system(&eligible_killmail(), &config));
    }

    #[test]
    fn test_empty_home_set_rejects_everything() {
        let config = FilterConfig::default();
        let km = eligible_killmail();
        assert!(!is_in_home_system(&km, &config));
        assert!(matches!(
            check_eligibility(&km, &config),
            Eligibility::Rejected(RejectReason::OutsideHomeSystems { .. })
        ));
    }

    // ---------------------------------------------------------------------
    // Empty pod
    //
    // The predicate excludes any killmail carrying value. That reads as the
    // inverse of its name; these tests pin the behavior pools were accrued
    // under.
    // ---------------------------------------------------------------------

    #[test]
    fn test_not_empty_pod_zero_value_is_eligible() {
        let km = eligible_killmail().with_total_value(0);
        assert!(is_not_empty_pod(&km));
        assert!(is_eligible(&km, &home_config()));
    }

    #[test]
    fn test_not_empty_pod_value_one_is_rejected() {
        let km = eligible_killmail().with_total_value(1);
        assert!(!is_not_empty_pod(&km));
        assert_eq!(
            check_eligibility(&km, &home_config()),
            Eligibility::Rejected(RejectReason::NonZeroValue { total_value: 1 })
        );
    }

    #[test]
    fn test_not_empty_pod_large_value_is_rejected() {
        let km = eligible_killmail().with_total_value(10_000);
        assert!(!is_not_empty_pod(&km));
    }

    // ---------------------------------------------------------------------
    // Fleet size
    // ---------------------------------------------------------------------

    #[test]
    fn test_eighteen_attackers_is_not_a_fleet() {
        let km = eligible_killmail().with_attackers(attackers(18));
        assert!(is_not_in_fleet(&km, &home_config()));
        assert!(is_eligible(&km, &home_config()));
    }

    #[test]
    fn test_nineteen_attackers_is_a_fleet() {
        let km = eligible_killmail().with_attackers(attackers(19));
        assert!(!is_not_in_fleet(&km, &home_config()));
        assert_eq!(
            check_eligibility(&km, &home_config()),
            Eligibility::Rejected(RejectReason::FleetKill {
                attackers: 19,
                threshold: 19
            })
        );
    }

    #[test]
    fn test_repeated_attackers_counted_once() {
        // 18 distinct attackers, one listed twice
        let mut ids: Vec<CharacterId> = attackers(18).collect();
        ids.push(CharacterId::new(1));
        let km = eligible_killmail().with_attackers(ids);
        assert_eq!(km.attacker_ids.len(), 19);
        assert!(is_not_in_fleet(&km, &home_config()));
    }

    #[test]
    fn test_custom_fleet_threshold() {
        let mut config = home_config();
        config.fleet_threshold = 5;
        let km = eligible_killmail().with_attackers(attackers(4));
        assert!(is_not_in_fleet(&km, &config));
        let km = eligible_killmail().with_attackers(attackers(5));
        assert!(!is_not_in_fleet(&km, &config));
    }

    // ---------------------------------------------------------------------
    // Combined
    // ---------------------------------------------------------------------

    #[test]
    fn test_first_failing_check_is_reported() {
        let km = eligible_killmail()
            .with_victim_group("Brave Collective")
            .with_total_value(5);
        assert!(matches!(
            check_eligibility(&km, &home_config()),
            Eligibility::Rejected(RejectReason::OwnGroupVictim { .. })
        ));
    }

    #[test]
    fn test_filter_eligible_keeps_order() {
        let kept_a = eligible_killmail();
        let mut dropped = eligible_killmail().with_total_value(3);
        dropped.kill_id = "k2".into();
        let mut kept_b = eligible_killmail();
        kept_b.kill_id = "k3".into();

        let result = filter_eligible(vec![kept_a.clone(), dropped, kept_b.clone()], &home_config());
        assert_eq!(result, vec![kept_a, kept_b]);
    }

    #[test]
    fn test_validate_rejects_negative_points() {
        let mut km = eligible_killmail();
        assert!(validate_killmail(&km).is_ok());

        km.points = 0;
        assert!(validate_killmail(&km).is_ok());

        km.points = -1;
        assert!(matches!(
            validate_killmail(&km),
            Err(KillmailError::NegativePoints { points: -1, .. })
        ));
    }
}
