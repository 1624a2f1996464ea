//! In-memory guild settings models.

/// Creates a guild settings entity model with both greetings configured.
///
/// The welcome greeting targets channel `200` and the goodbye greeting targets
/// channel `300`; both are enabled.
///
/// # Arguments
/// - `guild_id` - Guild ID stored on the model
pub fn entity(guild_id: u64) -> ::entity::guild_settings::Model {
    ::entity::guild_settings::Model {
        id: 1,
        guild_id: guild_id.to_string(),
        is_welcome_enabled: true,
        is_goodbye_enabled: true,
        welcome_message: "Welcome {@user} to {guild}!".to_string(),
        goodbye_message: "{name} left {guild}.".to_string(),
        welcome_channel_id: Some("200".to_string()),
        goodbye_channel_id: Some("300".to_string()),
    }
}
