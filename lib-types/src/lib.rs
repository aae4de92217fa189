//! Killmail reward primitives.
//! Stable, behavior-free building blocks shared by the filter, pool and puller crates.

pub mod errors;
pub mod period;
pub mod primitives;

pub use errors::{TypesError, TypesResult};
pub use period::YearMonth;
pub use primitives::{CharacterId, Coins, KillId, SolarSystemId};
