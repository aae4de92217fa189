//! Collaborator seams: where killmails and characters come from.
//!
//! The HTTP transport and upstream JSON parsing live behind
//! `KillmailSource`; the user registry lives behind `CharacterRegistry`.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use lib_killmail::Killmail;
use lib_types::CharacterId;

/// A registered account; not every account has linked a character yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub login: String,
    pub character_id: Option<CharacterId>,
}

impl RegisteredUser {
    pub fn new(login: impl Into<String>, character_id: Option<CharacterId>) -> Self {
        Self {
            login: login.into(),
            character_id,
        }
    }
}

/// Source of registered users
#[async_trait]
pub trait CharacterRegistry: Send + Sync {
    async fn registered_users(&self) -> Result<Vec<RegisteredUser>>;
}

/// Upstream killmail feed
#[async_trait]
pub trait KillmailSource: Send + Sync {
    /// Killmails involving `character_id` within the last `window`.
    ///
    /// `Ok(None)` when upstream returned no usable payload.
    async fn fetch_killmails(
        &self,
        character_id: CharacterId,
        window: Duration,
    ) -> Result<Option<Vec<Killmail>>>;
}
