//! Killmail Eligibility Filtering
//!
//! Decides which inbound killmails earn rewards.
//!
//! # Checks Performed
//!
//! 1. **Victim affiliation**: own-group losses never earn rewards
//! 2. **Home system**: only kills inside configured home systems count
//! 3. **Empty pod**: killmails carrying a non-zero value are excluded
//! 4. **Fleet size**: kills with too many distinct attackers are excluded
//!
//! # Usage
//!
//! ```ignore
//! use lib_killmail::{check_eligibility, Eligibility, FilterConfig};
//!
//! let config = FilterConfig::load("filter.toml")?;
//! match check_eligibility(&killmail, &config) {
//!     Eligibility::Eligible => { /* accrue */ }
//!     Eligibility::Rejected(reason) => { /* skip */ }
//! }
//! ```

pub mod config;
pub mod errors;
pub mod filter;
pub mod types;

pub use config::{FilterConfig, DEFAULT_FLEET_THRESHOLD, DEFAULT_OWN_GROUP_NAME};
pub use errors::{ConfigError, KillmailError, KillmailResult, RejectReason};
pub use filter::{
    check_eligibility, filter_eligible, is_eligible, is_in_home_system, is_not_empty_pod,
    is_not_in_fleet, is_victim_outsider, validate_killmail, Eligibility,
};
pub use types::Killmail;
