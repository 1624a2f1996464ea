use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildSettings::Id))
                    .col(string_uniq(GuildSettings::GuildId))
                    .col(boolean(GuildSettings::IsWelcomeEnabled).default(false))
                    .col(boolean(GuildSettings::IsGoodbyeEnabled).default(false))
                    .col(string(GuildSettings::WelcomeMessage).default(""))
                    .col(string(GuildSettings::GoodbyeMessage).default(""))
                    .col(string_null(GuildSettings::WelcomeChannelId))
                    .col(string_null(GuildSettings::GoodbyeChannelId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    Id,
    GuildId,
    IsWelcomeEnabled,
    IsGoodbyeEnabled,
    WelcomeMessage,
    GoodbyeMessage,
    WelcomeChannelId,
    GoodbyeChannelId,
}
