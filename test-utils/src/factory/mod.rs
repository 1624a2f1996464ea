//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let settings = factory::guild_settings::GuildSettingsFactory::new(&db)
//!     .guild_id("987654321")
//!     .welcome("Hi {name}!", Some("555"))
//!     .build()
//!     .await?;
//! ```

pub mod guild_settings;
pub mod helpers;

pub use guild_settings::create_guild_settings;
