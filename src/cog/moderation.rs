use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommandOption, Permissions,
    ResolvedValue, User,
};
use serenity::async_trait;

use crate::{
    cog::{respond, Cog, CogCommand},
    error::{cog::CogError, AppError},
    util::timeout::{with_timeout, DISCORD_TIMEOUT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanction {
    Kick,
    Ban,
}

impl Sanction {
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "kick" => Some(Self::Kick),
            "ban" => Some(Self::Ban),
            _ => None,
        }
    }

    /// Reply when a moderator targets themselves; nobody is sanctioned.
    pub fn self_target_reply(self, bot_name: &str) -> String {
        match self {
            Self::Kick => "Imagine kicking yourself, smh.".to_string(),
            Self::Ban => format!("Beaned **{}** from this server.", bot_name),
        }
    }

    pub fn done_reply(self, target: &str) -> String {
        match self {
            Self::Kick => format!("Kicked {} from this server.", target),
            Self::Ban => format!("Banned {} from this server.", target),
        }
    }

    /// Audit log reason used when the moderator gave none.
    pub fn default_reason(self, moderator: &str) -> String {
        match self {
            Self::Kick => format!("Kicked by {}", moderator),
            Self::Ban => format!("Banned by {}", moderator),
        }
    }
}

/// Kick and ban commands.
pub struct ModerationCog;

fn command(sanction: Sanction) -> CogCommand {
    let (name, description, permission) = match sanction {
        Sanction::Kick => ("kick", "Kick a member from the server", Permissions::KICK_MEMBERS),
        Sanction::Ban => ("ban", "Ban a member from the server", Permissions::BAN_MEMBERS),
    };

    CogCommand::new(name, description).with(|command| {
        command
            .default_member_permissions(permission)
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Member to remove")
                    .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Reason recorded in the audit log",
            ))
    })
}

#[async_trait]
impl Cog for ModerationCog {
    fn name(&self) -> &'static str {
        "Moderation"
    }

    fn commands(&self) -> Vec<CogCommand> {
        vec![command(Sanction::Kick), command(Sanction::Ban)]
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let sanction = Sanction::from_command(&command.data.name)
            .ok_or_else(|| CogError::UnknownCommand(command.data.name.clone()))?;
        let guild_id = command.guild_id.ok_or_else(|| {
            AppError::BadRequest("This command can only be used in a server.".to_string())
        })?;

        let mut target: Option<(&User, Option<String>)> = None;
        let mut reason = None;
        for option in command.data.options() {
            match (option.name, option.value) {
                ("member", ResolvedValue::User(user, member)) => {
                    target = Some((user, member.and_then(|m| m.nick.clone())));
                }
                ("reason", ResolvedValue::String(text)) => reason = Some(text.to_string()),
                _ => {}
            }
        }
        let (user, nick) =
            target.ok_or_else(|| AppError::BadRequest("Pick a member first.".to_string()))?;

        if user.id == command.user.id {
            let bot_name = ctx.cache.current_user().name.clone();
            return respond(ctx, command, sanction.self_target_reply(&bot_name), false).await;
        }

        let reason = reason.unwrap_or_else(|| sanction.default_reason(&command.user.name));
        match sanction {
            Sanction::Kick => {
                with_timeout(
                    "kick a member",
                    DISCORD_TIMEOUT,
                    guild_id.kick_with_reason(&ctx.http, user.id, &reason),
                )
                .await?
            }
            Sanction::Ban => {
                with_timeout(
                    "ban a member",
                    DISCORD_TIMEOUT,
                    guild_id.ban_with_reason(&ctx.http, user.id, 0, &reason),
                )
                .await?
            }
        }

        tracing::info!(
            "{} used /{} on {} in guild {}",
            command.user.name,
            command.data.name,
            user.id,
            guild_id
        );

        let target_name = nick.unwrap_or_else(|| user.display_name().to_string());
        respond(ctx, command, sanction.done_reply(&target_name), false).await
    }
}
