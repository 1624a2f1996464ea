//! Guild settings factory for creating test greeting configurations.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings with customizable fields.
///
/// Defaults to a guild with both greetings disabled, empty templates and no
/// channels, which matches a freshly get-or-created row.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id("987654321")
///     .welcome("Welcome {@user} to {guild}!", Some("555"))
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    is_welcome_enabled: bool,
    is_goodbye_enabled: bool,
    welcome_message: String,
    goodbye_message: String,
    welcome_channel_id: Option<String>,
    goodbye_channel_id: Option<String>,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique snowflake as string
    /// - welcome/goodbye: disabled, empty template, no channel
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake().to_string(),
            is_welcome_enabled: false,
            is_goodbye_enabled: false,
            welcome_message: String::new(),
            goodbye_message: String::new(),
            welcome_channel_id: None,
            goodbye_channel_id: None,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Enables the welcome greeting with the given template and channel.
    ///
    /// # Arguments
    /// - `message` - Welcome template, may contain placeholders
    /// - `channel_id` - Optional channel ID as string
    pub fn welcome(mut self, message: impl Into<String>, channel_id: Option<&str>) -> Self {
        self.is_welcome_enabled = true;
        self.welcome_message = message.into();
        self.welcome_channel_id = channel_id.map(str::to_string);
        self
    }

    /// Enables the goodbye greeting with the given template and channel.
    ///
    /// # Arguments
    /// - `message` - Goodbye template, may contain placeholders
    /// - `channel_id` - Optional channel ID as string
    pub fn goodbye(mut self, message: impl Into<String>, channel_id: Option<&str>) -> Self {
        self.is_goodbye_enabled = true;
        self.goodbye_message = message.into();
        self.goodbye_channel_id = channel_id.map(str::to_string);
        self
    }

    /// Overrides the welcome flag without touching the template.
    pub fn welcome_enabled(mut self, enabled: bool) -> Self {
        self.is_welcome_enabled = enabled;
        self
    }

    /// Overrides the goodbye flag without touching the template.
    pub fn goodbye_enabled(mut self, enabled: bool) -> Self {
        self.is_goodbye_enabled = enabled;
        self
    }

    /// Builds and inserts the guild settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            is_welcome_enabled: ActiveValue::Set(self.is_welcome_enabled),
            is_goodbye_enabled: ActiveValue::Set(self.is_goodbye_enabled),
            welcome_message: ActiveValue::Set(self.welcome_message),
            goodbye_message: ActiveValue::Set(self.goodbye_message),
            welcome_channel_id: ActiveValue::Set(self.welcome_channel_id),
            goodbye_channel_id: ActiveValue::Set(self.goodbye_channel_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings with default values.
///
/// Shorthand for `GuildSettingsFactory::new(db).build().await`.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}
