//! Killmail Pull Cycle
//!
//! Hosts the accrual cycle around the filter and pool crates: asks the
//! registry for characters, the source for their killmails, and feeds the
//! eligible ones into the current month's pool.
//!
//! Pulls run hourly over a one-hour window, with a periodic catch-up pull
//! over the last week to recover killmails the feed delivered late.
//!
//! # Usage
//!
//! ```ignore
//! use lib_puller::{run_scheduler, KillmailPuller, PullerConfig};
//!
//! let config = PullerConfig::load("puller.toml")?;
//! let puller = Arc::new(KillmailPuller::new(registry, source, pools, killmails, config));
//! let (stop, stopped) = tokio::sync::watch::channel(false);
//! tokio::spawn(run_scheduler(puller, stopped));
//! ```

pub mod config;
pub mod puller;
pub mod scheduler;
pub mod source;

pub use config::{PullerConfig, HOUR, WEEK};
pub use puller::{CycleReport, KillmailPuller};
pub use scheduler::run_scheduler;
pub use source::{CharacterRegistry, KillmailSource, RegisteredUser};
