use sea_orm::DbErr;

use crate::util::parse::parse_u64_from_string;

/// Greeting configuration of one guild.
///
/// Param model built from `entity::guild_settings::Model` at the repository
/// boundary. Channel ids that are unset, zero or unparsable are `None`, which
/// the greeting relay treats as an unresolved channel.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    pub is_welcome_enabled: bool,
    pub is_goodbye_enabled: bool,
    /// Welcome template; may contain `{guild}`, `{name}`, `{tag}` and `{@user}`.
    pub welcome_message: String,
    /// Goodbye template; may contain `{guild}`, `{name}` and `{tag}`.
    pub goodbye_message: String,
    pub welcome_channel_id: Option<u64>,
    pub goodbye_channel_id: Option<u64>,
}

impl GuildSettings {
    /// Converts an entity model to a param model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Successfully converted param model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, DbErr> {
        let guild_id = parse_u64_from_string(entity.guild_id)
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            is_welcome_enabled: entity.is_welcome_enabled,
            is_goodbye_enabled: entity.is_goodbye_enabled,
            welcome_message: entity.welcome_message,
            goodbye_message: entity.goodbye_message,
            welcome_channel_id: channel_id(entity.welcome_channel_id),
            goodbye_channel_id: channel_id(entity.goodbye_channel_id),
        })
    }
}

fn channel_id(raw: Option<String>) -> Option<u64> {
    raw.and_then(|id| parse_u64_from_string(id).ok())
        .filter(|id| *id != 0)
}
