//! Domain models used between the data layer and the bot.
//!
//! Repositories return SeaORM entity models; these types are what the rest of
//! the crate works with, with Discord ids parsed into `u64` and Serenity payloads
//! flattened into the fields the bot actually uses.

pub mod guild_settings;
pub mod member;
pub mod start_time;
