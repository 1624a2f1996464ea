use super::*;

/// Tests finding settings that exist.
///
/// Expected: Ok(Some) with the stored row
#[tokio::test]
async fn finds_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::guild_settings::GuildSettingsFactory::new(db)
        .guild_id("987654321")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let found = repo.find_by_guild_id(987654321).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().guild_id, "987654321");

    Ok(())
}

/// Tests that finding does not create a row.
///
/// Expected: Ok(None) and an empty table
#[tokio::test]
async fn does_not_create_missing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = GuildSettingsRepository::new(db);
    let found = repo.find_by_guild_id(987654321).await?;

    assert!(found.is_none());
    assert_eq!(entity::prelude::GuildSettings::find().count(db).await?, 0);

    Ok(())
}
