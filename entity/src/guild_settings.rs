use sea_orm::entity::prelude::*;

/// Per-guild greeting configuration.
///
/// One row per Discord guild, created on first reference through the
/// repository's get-or-create and edited by the `/config` commands.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub is_welcome_enabled: bool,
    pub is_goodbye_enabled: bool,
    pub welcome_message: String,
    pub goodbye_message: String,
    pub welcome_channel_id: Option<String>,
    pub goodbye_channel_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
