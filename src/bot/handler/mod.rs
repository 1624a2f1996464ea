use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, Interaction, Member, Ready, User};
use serenity::async_trait;
use tokio::sync::OnceCell;

use crate::{
    cog::registry::{CogRegistry, LoadedCogs},
    config::Config,
    model::start_time::StartTime,
};

pub mod error;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub started_at: StartTime,
    pub registry: CogRegistry,
    /// Cogs activated on the first ready; empty until then.
    pub cogs: OnceCell<Arc<LoadedCogs>>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: Arc<Config>, started_at: StartTime) -> Self {
        Self {
            db,
            config,
            started_at,
            registry: CogRegistry::builtin(),
            cogs: OnceCell::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called each time a shard connects to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.db, ctx, guild_id, user, member_data_if_available)
            .await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self.cogs.get(), ctx, interaction).await;
    }
}
