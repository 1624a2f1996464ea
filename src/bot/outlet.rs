use serenity::all::{ChannelId, Context, GuildId};
use serenity::async_trait;

use crate::{
    error::AppError,
    service::greeting::MessageOutlet,
    util::timeout::{with_timeout, DISCORD_TIMEOUT},
};

/// Delivers greetings through the gateway context.
pub struct SerenityOutlet<'a> {
    ctx: &'a Context,
}

impl<'a> SerenityOutlet<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl MessageOutlet for SerenityOutlet<'_> {
    /// Resolves a text channel or an active thread from the guild cache.
    fn resolve(&self, guild_id: u64, channel_id: u64) -> Option<ChannelId> {
        let guild = GuildId::new(guild_id).to_guild_cached(&self.ctx.cache)?;
        let channel_id = ChannelId::new(channel_id);

        let known = guild.channels.contains_key(&channel_id)
            || guild.threads.iter().any(|thread| thread.id == channel_id);

        known.then_some(channel_id)
    }

    /// Name of a guild, from the cache when possible.
    ///
    /// Falls back to the REST API, then to the raw ID so a greeting can always
    /// be rendered.
    async fn guild_name(&self, guild_id: u64) -> String {
        let guild_id = GuildId::new(guild_id);
        if let Some(name) = guild_id.name(&self.ctx.cache) {
            return name;
        }

        let fetched: Result<_, AppError> = with_timeout(
            "fetch a guild",
            DISCORD_TIMEOUT,
            guild_id.to_partial_guild(&self.ctx.http),
        )
        .await;

        match fetched {
            Ok(guild) => guild.name,
            Err(e) => {
                tracing::warn!("Failed to fetch name of guild {}: {}", guild_id, e);
                guild_id.to_string()
            }
        }
    }

    async fn send(&self, channel_id: ChannelId, content: String) -> Result<(), AppError> {
        with_timeout(
            "send a greeting",
            DISCORD_TIMEOUT,
            channel_id.say(&self.ctx.http, content),
        )
        .await?;

        Ok(())
    }
}
