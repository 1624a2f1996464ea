//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `discriminator` - Legacy 4-digit tag, `None` for migrated accounts
/// - `global_name` - Optional display name set on the account
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(
    user_id: u64,
    username: &str,
    discriminator: Option<u16>,
    global_name: Option<&str>,
) -> User {
    let discriminator = discriminator
        .map(|d| format!("{:04}", d))
        .unwrap_or_else(|| "0".to_string());

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": discriminator,
        "global_name": global_name,
        "avatar": null,
        "bot": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
