//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Use fixtures for unit tests of conversion and business logic that never touch
//! the database. Factories in `crate::factory` are the inserting counterpart.

pub mod guild_settings;

pub use guild_settings::entity as guild_settings_entity;
