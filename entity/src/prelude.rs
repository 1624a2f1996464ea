pub use super::guild_settings::Entity as GuildSettings;
