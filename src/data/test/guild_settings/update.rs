use super::*;

/// Tests configuring the welcome greeting field by field.
///
/// Verifies that each setter persists its value and leaves the goodbye
/// configuration alone.
///
/// Expected: Ok with welcome fields updated
#[tokio::test]
async fn updates_welcome_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    repo.set_welcome_enabled(42, true).await?;
    repo.set_welcome_message(42, "Welcome {@user}!".to_string())
        .await?;
    let settings = repo.set_welcome_channel(42, Some(777)).await?;

    assert!(settings.is_welcome_enabled);
    assert_eq!(settings.welcome_message, "Welcome {@user}!");
    assert_eq!(settings.welcome_channel_id, Some("777".to_string()));
    assert!(!settings.is_goodbye_enabled);
    assert_eq!(settings.goodbye_message, "");

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored, settings);

    Ok(())
}

/// Tests configuring the goodbye greeting field by field.
///
/// Expected: Ok with goodbye fields updated
#[tokio::test]
async fn updates_goodbye_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    repo.set_goodbye_enabled(42, true).await?;
    repo.set_goodbye_message(42, "{name} left".to_string())
        .await?;
    let settings = repo.set_goodbye_channel(42, Some(888)).await?;

    assert!(settings.is_goodbye_enabled);
    assert_eq!(settings.goodbye_message, "{name} left");
    assert_eq!(settings.goodbye_channel_id, Some("888".to_string()));
    assert!(!settings.is_welcome_enabled);

    Ok(())
}

/// Tests clearing a configured channel.
///
/// Expected: Ok with the channel set back to None
#[tokio::test]
async fn clears_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("42")
        .welcome("Hi", Some("555"))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.set_welcome_channel(42, None).await?;

    assert!(settings.welcome_channel_id.is_none());
    assert!(settings.is_welcome_enabled);

    Ok(())
}

/// Tests that updating an unknown guild creates its row first.
///
/// Expected: Ok with a single row holding the update
#[tokio::test]
async fn creates_row_when_updating_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.set_goodbye_enabled(99, true).await?;

    assert!(settings.is_goodbye_enabled);
    assert_eq!(entity::prelude::GuildSettings::find().count(db).await?, 1);

    Ok(())
}
