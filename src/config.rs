use crate::{
    bot::presence::{parse_status, ActivityKind, PresenceConfig},
    error::{config::ConfigError, AppError},
    util::parse::split_list,
    version::DEFAULT_UPSTREAM_URL,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://nameless.db?mode=rwc";
const DEFAULT_COGS: &str = "General,Config";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Cog names to activate, in load order.
    pub cogs: Vec<String>,
    /// Guilds to sync slash commands to; empty means a global sync.
    pub guild_ids: Vec<u64>,
    pub presence: PresenceConfig,

    pub upstream_version_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Blank values count as unset so a `.env` line like `BOT_GUILD_IDS=` falls
    /// back to the default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        let guild_ids = split_list(&var("BOT_GUILD_IDS").unwrap_or_default())
            .into_iter()
            .map(|id| match id.parse::<u64>() {
                Ok(parsed) if parsed != 0 => Ok(parsed),
                _ => Err(ConfigError::InvalidEnvVar {
                    name: "BOT_GUILD_IDS".to_string(),
                    value: id,
                    reason: "guild IDs must be positive integers".to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let status = match var("BOT_STATUS") {
            Some(value) => parse_status("BOT_STATUS", &value)?,
            None => PresenceConfig::default().status,
        };

        let activity_kind = var("BOT_ACTIVITY_TYPE")
            .map(|value| {
                value
                    .parse::<ActivityKind>()
                    .map_err(|reason| ConfigError::InvalidEnvVar {
                        name: "BOT_ACTIVITY_TYPE".to_string(),
                        value,
                        reason,
                    })
            })
            .transpose()?;

        Ok(Self {
            discord_bot_token: var("DISCORD_BOT_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            cogs: split_list(&var("BOT_COGS").unwrap_or_else(|| DEFAULT_COGS.to_string())),
            guild_ids,
            presence: PresenceConfig {
                status,
                activity_kind,
                activity_name: var("BOT_ACTIVITY_NAME").unwrap_or_default(),
                activity_url: var("BOT_ACTIVITY_URL"),
            },
            upstream_version_url: var("UPSTREAM_VERSION_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
        })
    }
}
