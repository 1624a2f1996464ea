use super::*;

/// Tests creating settings for a guild seen for the first time.
///
/// Verifies that a default row is inserted with both greetings disabled,
/// empty templates and no channels.
///
/// Expected: Ok with default settings created
#[tokio::test]
async fn creates_default_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings.guild_id, "123456789");
    assert!(!settings.is_welcome_enabled);
    assert!(!settings.is_goodbye_enabled);
    assert_eq!(settings.welcome_message, "");
    assert_eq!(settings.goodbye_message, "");
    assert!(settings.welcome_channel_id.is_none());
    assert!(settings.goodbye_channel_id.is_none());

    Ok(())
}

/// Tests that existing settings are returned untouched.
///
/// Verifies that get_or_create does not overwrite a configured row with
/// defaults.
///
/// Expected: Ok with the configured values
#[tokio::test]
async fn returns_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let existing = factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("123456789")
        .welcome("Hi {name}", Some("555"))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(123456789).await?;

    assert_eq!(settings, existing);

    Ok(())
}

/// Tests repeated get_or_create calls for one guild.
///
/// Verifies that calling get_or_create several times, including
/// concurrently, leaves exactly one row for the guild.
///
/// Expected: Ok with a single row
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    let first = repo.get_or_create(42).await?;
    let (second, third) = tokio::join!(repo.get_or_create(42), repo.get_or_create(42));

    assert_eq!(first.id, second?.id);
    assert_eq!(first.id, third?.id);

    let count = entity::prelude::GuildSettings::find()
        .filter(entity::guild_settings::Column::GuildId.eq("42"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different guilds get separate rows.
///
/// Expected: Ok with one row per guild
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    let first = repo.get_or_create(1).await?;
    let second = repo.get_or_create(2).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::GuildSettings::find().count(db).await?, 2);

    Ok(())
}
