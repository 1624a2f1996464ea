use std::sync::Arc;

use serenity::all::{
    CommandInteraction, Context, CreateAllowedMentions, CreateInteractionResponseFollowup,
    Interaction,
};
use serenity::async_trait;

use crate::{
    bot::handler::error::handle_error,
    cog::registry::LoadedCogs,
    error::{cog::CogError, AppError},
    service::command_error::{report, CommandResponder},
    util::timeout::{with_timeout, DISCORD_TIMEOUT},
};

/// Answers a slash command interaction through the gateway context.
pub struct SerenityResponder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
}

impl<'a> SerenityResponder<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self { ctx, command }
    }
}

#[async_trait]
impl CommandResponder for SerenityResponder<'_> {
    async fn defer(&self) -> Result<(), AppError> {
        with_timeout(
            "defer a command",
            DISCORD_TIMEOUT,
            self.command.defer(&self.ctx.http),
        )
        .await
    }

    async fn reply(&self, content: String) -> Result<(), AppError> {
        let followup = CreateInteractionResponseFollowup::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new());

        with_timeout(
            "reply to a command",
            DISCORD_TIMEOUT,
            self.command.create_followup(&self.ctx.http, followup),
        )
        .await?;

        Ok(())
    }
}

/// Handles the interaction_create event by routing slash commands to cogs
pub async fn handle_interaction_create(
    cogs: Option<&Arc<LoadedCogs>>,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match cogs.and_then(|cogs| cogs.route(&command.data.name)) {
        Some(cog) => cog.run(&ctx, &command).await,
        None => Err(CogError::UnknownCommand(command.data.name.clone()).into()),
    };

    let Err(err) = result else {
        return;
    };

    tracing::warn!(
        "/{} failed for {} ({}): {}",
        command.data.name,
        command.user.name,
        command.user.id,
        err
    );

    if let Err(e) = report(&SerenityResponder::new(&ctx, &command), &err).await {
        handle_error("command_error", &e);
    }
}
