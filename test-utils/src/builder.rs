use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Describes the schema of a test database.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_bot_tables().build().await?;
/// let repo = GuildSettingsRepository::new(test.db());
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table of `entity`, derived from its SeaORM definition.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Creates every table the bot persists to.
    pub fn with_bot_tables(self) -> Self {
        self.with_table(GuildSettings)
    }

    /// Connects to a new in-memory database with the requested tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for use
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::connect(self.tables).await
    }
}
