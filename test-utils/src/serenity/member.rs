//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Creates a test Serenity Member of the given guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user` - User backing the membership, see `create_test_user`
/// - `nick` - Optional guild nickname
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user: User, nick: Option<&str>) -> Member {
    let user = serde_json::to_value(&user).expect("Failed to serialize test user");

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user,
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
