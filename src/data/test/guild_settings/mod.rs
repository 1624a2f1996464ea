use crate::data::guild_settings::GuildSettingsRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_or_create;
mod update;
