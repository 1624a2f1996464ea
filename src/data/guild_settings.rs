use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the settings row of a guild, creating a default one first if needed.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING` on the unique guild id, so two
    /// events for the same new guild racing each other both end up reading the
    /// single row that won.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or freshly created settings
    /// - `Err(DbErr)` - Database error during insert or query
    pub async fn get_or_create(
        &self,
        guild_id: u64,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            is_welcome_enabled: ActiveValue::Set(false),
            is_goodbye_enabled: ActiveValue::Set(false),
            welcome_message: ActiveValue::Set(String::new()),
            goodbye_message: ActiveValue::Set(String::new()),
            welcome_channel_id: ActiveValue::Set(None),
            goodbye_channel_id: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild_settings for {}", guild_id)))
    }

    /// Finds the settings of a guild without creating them.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Settings exist
    /// - `Ok(None)` - The guild was never referenced
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_settings::Model>, DbErr> {
        entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    pub async fn set_welcome_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.is_welcome_enabled = ActiveValue::Set(enabled);
        })
        .await
    }

    pub async fn set_goodbye_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.is_goodbye_enabled = ActiveValue::Set(enabled);
        })
        .await
    }

    pub async fn set_welcome_message(
        &self,
        guild_id: u64,
        message: String,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.welcome_message = ActiveValue::Set(message);
        })
        .await
    }

    pub async fn set_goodbye_message(
        &self,
        guild_id: u64,
        message: String,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.goodbye_message = ActiveValue::Set(message);
        })
        .await
    }

    /// Points the welcome greeting at a channel, or clears it with `None`.
    pub async fn set_welcome_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.welcome_channel_id = ActiveValue::Set(channel_id.map(|id| id.to_string()));
        })
        .await
    }

    /// Points the goodbye greeting at a channel, or clears it with `None`.
    pub async fn set_goodbye_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<entity::guild_settings::Model, DbErr> {
        self.update(guild_id, |settings| {
            settings.goodbye_channel_id = ActiveValue::Set(channel_id.map(|id| id.to_string()));
        })
        .await
    }

    /// Applies `change` to the guild's settings row, creating it first if needed.
    async fn update(
        &self,
        guild_id: u64,
        change: impl FnOnce(&mut entity::guild_settings::ActiveModel),
    ) -> Result<entity::guild_settings::Model, DbErr> {
        let mut settings: entity::guild_settings::ActiveModel =
            self.get_or_create(guild_id).await?.into();

        change(&mut settings);

        settings.update(self.db).await
    }
}
