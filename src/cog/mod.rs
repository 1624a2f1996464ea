//! Feature plugins ("cogs") that contribute slash commands.
//!
//! Each cog is a type implementing [`Cog`], built by a factory listed in the
//! [`registry::CogRegistry`]. Which cogs are active is decided by the
//! `BOT_COGS` allow-list when the bot first becomes ready; commands arriving
//! afterwards are routed to the cog that declared them.

pub mod config;
pub mod general;
pub mod moderation;
pub mod registry;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateAllowedMentions, CreateCommand,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::start_time::StartTime,
    util::timeout::{with_timeout, DISCORD_TIMEOUT},
};

/// A slash command declared by a cog.
pub struct CogCommand {
    /// Command name as invoked by users, without the leading slash.
    pub name: &'static str,
    /// Definition synced to Discord; its name must equal `name`.
    pub definition: CreateCommand,
}

impl CogCommand {
    pub fn new(name: &'static str, description: &str) -> Self {
        Self {
            name,
            definition: CreateCommand::new(name).description(description),
        }
    }

    /// Adjusts the command definition.
    pub fn with(mut self, build: impl FnOnce(CreateCommand) -> CreateCommand) -> Self {
        self.definition = build(self.definition);
        self
    }
}

#[async_trait]
pub trait Cog: Send + Sync {
    /// Stable name used in the `BOT_COGS` allow-list.
    fn name(&self) -> &'static str;

    /// Slash commands this cog handles.
    fn commands(&self) -> Vec<CogCommand>;

    /// Executes one of this cog's commands.
    ///
    /// An `Err` is reported back to the invoking user by the interaction handler.
    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError>;
}

/// Shared resources handed to cog factories.
#[derive(Clone)]
pub struct CogDeps {
    pub db: DatabaseConnection,
    pub started_at: StartTime,
}

/// Replies to a command with plain text.
///
/// Mentions in the content never ping anyone.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral)
        .allowed_mentions(CreateAllowedMentions::new());

    with_timeout(
        "respond to a command",
        DISCORD_TIMEOUT,
        command.create_response(&ctx.http, CreateInteractionResponse::Message(message)),
    )
    .await
}
