use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// An in-memory SQLite database prepared for one test.
///
/// Built through `TestBuilder`. `db` is always `Some` once `build()` returned;
/// tests may take it out to hand the connection to code that owns it.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database and creates `tables` in order.
    pub async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db: Some(db) })
    }

    /// Borrows the connection.
    ///
    /// # Panics
    /// If the connection was taken out of `db`.
    pub fn db(&self) -> &DatabaseConnection {
        self.db
            .as_ref()
            .expect("test database connection was moved out of the context")
    }
}
