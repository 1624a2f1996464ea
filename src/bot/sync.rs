//! Registering slash commands with Discord.

use std::sync::Arc;

use serenity::all::{Command, CreateCommand, GuildId, Http};
use serenity::async_trait;

use crate::{
    error::AppError,
    util::timeout::{with_timeout, DISCORD_TIMEOUT},
};

/// Where a set of commands is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTarget {
    Guild(GuildId),
    Global,
}

/// Replaces the commands registered on Discord.
///
/// Implemented over Serenity's HTTP client by the bot, and by fakes in tests.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Registers `commands` on `target`, returning how many Discord accepted.
    async fn set_commands(
        &self,
        target: SyncTarget,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError>;
}

pub struct HttpRegistrar<'a> {
    http: &'a Arc<Http>,
}

impl<'a> HttpRegistrar<'a> {
    pub fn new(http: &'a Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandRegistrar for HttpRegistrar<'_> {
    async fn set_commands(
        &self,
        target: SyncTarget,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, AppError> {
        let registered = match target {
            SyncTarget::Guild(guild_id) => {
                with_timeout(
                    "sync guild commands",
                    DISCORD_TIMEOUT,
                    guild_id.set_commands(self.http, commands),
                )
                .await?
            }
            SyncTarget::Global => {
                with_timeout(
                    "sync global commands",
                    DISCORD_TIMEOUT,
                    Command::set_global_commands(self.http, commands),
                )
                .await?
            }
        };

        Ok(registered.len())
    }
}

/// Sync targets for the configured guilds, in configuration order.
///
/// No configured guild means a single global sync.
pub fn plan(guild_ids: &[u64]) -> Vec<SyncTarget> {
    if guild_ids.is_empty() {
        return vec![SyncTarget::Global];
    }

    guild_ids
        .iter()
        .map(|&id| SyncTarget::Guild(GuildId::new(id)))
        .collect()
}

/// Replaces the registered commands on every target.
///
/// A failing target is logged and the remaining ones are still synced.
///
/// # Returns
/// Number of targets synced successfully.
pub async fn sync_commands(
    registrar: &dyn CommandRegistrar,
    guild_ids: &[u64],
    commands: Vec<CreateCommand>,
) -> usize {
    let mut synced = 0;

    for target in plan(guild_ids) {
        match target {
            SyncTarget::Guild(guild_id) => {
                tracing::info!("Syncing commands with guild ID {}", guild_id)
            }
            SyncTarget::Global => tracing::info!("Syncing commands globally"),
        }

        match registrar.set_commands(target, commands.clone()).await {
            Ok(registered) => {
                tracing::debug!("Registered {} commands on {:?}", registered, target);
                synced += 1;
            }
            Err(e) => tracing::error!("Failed to sync commands on {:?}: {}", target, e),
        }
    }

    synced
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Registrar that records every attempt and fails for chosen guilds.
    #[derive(Default)]
    pub(crate) struct RecordingRegistrar {
        pub failing: Vec<u64>,
        pub attempts: Mutex<Vec<SyncTarget>>,
    }

    impl RecordingRegistrar {
        pub fn attempts(&self) -> Vec<SyncTarget> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRegistrar for RecordingRegistrar {
        async fn set_commands(
            &self,
            target: SyncTarget,
            commands: Vec<CreateCommand>,
        ) -> Result<usize, AppError> {
            self.attempts.lock().unwrap().push(target);
            // Lets concurrent callers overlap.
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;

            match target {
                SyncTarget::Guild(id) if self.failing.contains(&id.get()) => {
                    Err(AppError::BadRequest("Missing Access".to_string()))
                }
                _ => Ok(commands.len()),
            }
        }
    }

    fn commands() -> Vec<CreateCommand> {
        vec![
            CreateCommand::new("ping").description("Pong"),
            CreateCommand::new("uptime").description("Uptime"),
        ]
    }

    #[test]
    fn plans_global_sync_without_guilds() {
        assert_eq!(plan(&[]), vec![SyncTarget::Global]);
    }

    #[test]
    fn plans_guild_syncs_in_order() {
        assert_eq!(
            plan(&[30, 10, 20]),
            vec![
                SyncTarget::Guild(GuildId::new(30)),
                SyncTarget::Guild(GuildId::new(10)),
                SyncTarget::Guild(GuildId::new(20)),
            ]
        );
    }

    /// Tests that a guild rejecting the sync does not stop the others.
    ///
    /// Expected: all three guilds attempted in order, two synced
    #[tokio::test]
    async fn continues_after_failed_guild() {
        let registrar = RecordingRegistrar {
            failing: vec![20],
            ..Default::default()
        };

        let synced = sync_commands(&registrar, &[10, 20, 30], commands()).await;

        assert_eq!(synced, 2);
        assert_eq!(
            registrar.attempts(),
            vec![
                SyncTarget::Guild(GuildId::new(10)),
                SyncTarget::Guild(GuildId::new(20)),
                SyncTarget::Guild(GuildId::new(30)),
            ]
        );
    }

    /// Tests the global sync used when no guild is configured.
    ///
    /// Expected: exactly one global attempt
    #[tokio::test]
    async fn syncs_globally_without_guilds() {
        let registrar = RecordingRegistrar::default();

        let synced = sync_commands(&registrar, &[], commands()).await;

        assert_eq!(synced, 1);
        assert_eq!(registrar.attempts(), vec![SyncTarget::Global]);
    }
}
