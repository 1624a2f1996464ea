//! Discord gateway client: event handling, command sync and presence.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, channel and thread data for the cache
//! - `GUILD_MEMBERS` - Receive member join and leave events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod outlet;
pub mod presence;
pub mod start;
pub mod sync;
