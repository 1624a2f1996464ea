//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return entity models;
//! callers convert them into `crate::model` types. All database reads and writes
//! the bot performs go through here.

pub mod guild_settings;

pub use guild_settings::GuildSettingsRepository;

#[cfg(test)]
mod test;
