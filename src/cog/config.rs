//! Guild configuration of welcome and goodbye messages.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommandOption,
    Permissions, ResolvedOption, ResolvedValue,
};
use serenity::async_trait;

use crate::{
    cog::{respond, Cog, CogCommand, CogDeps},
    data::GuildSettingsRepository,
    error::{cog::CogError, AppError},
    model::guild_settings::GuildSettings,
    service::greeting::GreetingKind,
};

const GREETING_CHANNEL_TYPES: [ChannelType; 4] = [
    ChannelType::Text,
    ChannelType::News,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
];

/// A `/config` subcommand with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    View,
    Toggle(GreetingKind),
    SetMessage(GreetingKind, String),
    /// `None` clears the channel.
    SetChannel(GreetingKind, Option<u64>),
}

impl ConfigAction {
    fn from_options(options: &[ResolvedOption<'_>]) -> Result<Self, AppError> {
        let Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(args),
            ..
        }) = options.first()
        else {
            return Err(AppError::BadRequest("Pick a /config subcommand.".to_string()));
        };

        let kind = if name.starts_with("welcome") {
            GreetingKind::Welcome
        } else {
            GreetingKind::Goodbye
        };

        let action = match *name {
            "view" => Self::View,
            "welcome-toggle" | "goodbye-toggle" => Self::Toggle(kind),
            "welcome-message" | "goodbye-message" => {
                let message = args.iter().find_map(|arg| match (arg.name, &arg.value) {
                    ("message", ResolvedValue::String(text)) => Some(text.to_string()),
                    _ => None,
                });
                let message = message
                    .ok_or_else(|| AppError::BadRequest("A message is required.".to_string()))?;
                Self::SetMessage(kind, message)
            }
            "welcome-channel" | "goodbye-channel" => {
                let channel = args.iter().find_map(|arg| match (arg.name, &arg.value) {
                    ("channel", ResolvedValue::Channel(channel)) => Some(channel.id.get()),
                    _ => None,
                });
                Self::SetChannel(kind, channel)
            }
            other => return Err(CogError::UnknownCommand(format!("config {}", other)).into()),
        };

        Ok(action)
    }

    /// Applies the action to a guild's settings.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation shown to the invoking user
    /// - `Err(AppError::DbErr)` - Reading or writing the settings failed
    pub async fn apply(self, db: &DatabaseConnection, guild_id: u64) -> Result<String, AppError> {
        let repo = GuildSettingsRepository::new(db);

        let reply = match self {
            Self::View => {
                let settings = GuildSettings::from_entity(repo.get_or_create(guild_id).await?)?;
                describe_settings(&settings)
            }
            Self::Toggle(kind) => {
                let current = repo.get_or_create(guild_id).await?;
                let enabled = match kind {
                    GreetingKind::Welcome => {
                        repo.set_welcome_enabled(guild_id, !current.is_welcome_enabled)
                            .await?
                            .is_welcome_enabled
                    }
                    GreetingKind::Goodbye => {
                        repo.set_goodbye_enabled(guild_id, !current.is_goodbye_enabled)
                            .await?
                            .is_goodbye_enabled
                    }
                };
                format!(
                    "{} messages are now {}.",
                    capitalized(kind),
                    if enabled { "enabled" } else { "disabled" }
                )
            }
            Self::SetMessage(kind, message) => {
                match kind {
                    GreetingKind::Welcome => repo.set_welcome_message(guild_id, message).await?,
                    GreetingKind::Goodbye => repo.set_goodbye_message(guild_id, message).await?,
                };
                format!("{} message updated.", capitalized(kind))
            }
            Self::SetChannel(kind, channel_id) => {
                match kind {
                    GreetingKind::Welcome => repo.set_welcome_channel(guild_id, channel_id).await?,
                    GreetingKind::Goodbye => repo.set_goodbye_channel(guild_id, channel_id).await?,
                };
                match channel_id {
                    Some(id) => format!("{} messages will be sent to <#{}>.", capitalized(kind), id),
                    None => format!("{} channel cleared.", capitalized(kind)),
                }
            }
        };

        Ok(reply)
    }
}

fn capitalized(kind: GreetingKind) -> &'static str {
    match kind {
        GreetingKind::Welcome => "Welcome",
        GreetingKind::Goodbye => "Goodbye",
    }
}

/// Renders a guild's greeting configuration for `/config view`.
pub fn describe_settings(settings: &GuildSettings) -> String {
    let section = |kind: GreetingKind, enabled: bool, channel: Option<u64>, message: &str| {
        format!(
            "**{}**: {}\nChannel: {}\nMessage: {}",
            capitalized(kind),
            if enabled { "enabled" } else { "disabled" },
            channel
                .map(|id| format!("<#{}>", id))
                .unwrap_or_else(|| "not set".to_string()),
            if message.is_empty() { "not set" } else { message },
        )
    };

    format!(
        "{}\n\n{}",
        section(
            GreetingKind::Welcome,
            settings.is_welcome_enabled,
            settings.welcome_channel_id,
            &settings.welcome_message,
        ),
        section(
            GreetingKind::Goodbye,
            settings.is_goodbye_enabled,
            settings.goodbye_channel_id,
            &settings.goodbye_message,
        ),
    )
}

/// Lets server managers configure greetings.
pub struct ConfigCog {
    db: DatabaseConnection,
}

impl ConfigCog {
    pub fn new(deps: &CogDeps) -> Self {
        Self {
            db: deps.db.clone(),
        }
    }
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn message_argument() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        "message",
        "Template; supports {guild}, {name}, {tag} and {@user}",
    )
    .required(true)
}

fn channel_argument() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Channel,
        "channel",
        "Channel to post in; leave out to clear",
    )
    .channel_types(GREETING_CHANNEL_TYPES.to_vec())
}

#[async_trait]
impl Cog for ConfigCog {
    fn name(&self) -> &'static str {
        "Config"
    }

    fn commands(&self) -> Vec<CogCommand> {
        vec![
            CogCommand::new("config", "Configure welcome and goodbye messages").with(|command| {
                command
                    .default_member_permissions(Permissions::MANAGE_GUILD)
                    .add_option(subcommand("view", "Show the current settings"))
                    .add_option(subcommand("welcome-toggle", "Turn welcome messages on or off"))
                    .add_option(subcommand("goodbye-toggle", "Turn goodbye messages on or off"))
                    .add_option(
                        subcommand("welcome-message", "Set the welcome message")
                            .add_sub_option(message_argument()),
                    )
                    .add_option(
                        subcommand("goodbye-message", "Set the goodbye message")
                            .add_sub_option(message_argument()),
                    )
                    .add_option(
                        subcommand("welcome-channel", "Set the welcome channel")
                            .add_sub_option(channel_argument()),
                    )
                    .add_option(
                        subcommand("goodbye-channel", "Set the goodbye channel")
                            .add_sub_option(channel_argument()),
                    )
            }),
        ]
    }

    async fn run(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let guild_id = command.guild_id.ok_or_else(|| {
            AppError::BadRequest("This command can only be used in a server.".to_string())
        })?;

        let action = ConfigAction::from_options(&command.data.options())?;
        let reply = action.apply(&self.db, guild_id.get()).await?;

        respond(ctx, command, reply, true).await
    }
}
