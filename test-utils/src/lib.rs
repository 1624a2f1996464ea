//! Nameless Test Utils
//!
//! Provides shared testing utilities for the bot. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, factories that insert entities with
//! sensible defaults, fixtures for in-memory entity models, and helpers that build Serenity
//! objects from JSON the way Discord's API would deliver them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildSettings;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSettings)
//!         .build()
//!         .await?;
//!
//!     let db = test.db();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
