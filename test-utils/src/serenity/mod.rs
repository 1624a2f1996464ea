//! Test factories for creating Serenity API objects.
//!
//! These factories build valid Serenity structs by deserializing JSON shaped like
//! Discord's gateway payloads, so tests can exercise code that takes real
//! `Member` and `User` values without a live connection.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! let user = create_test_user(123, "alice", Some(1234), None);
//! let member = create_test_member(456, user, Some("Ally"));
//! ```

pub mod member;
pub mod user;

pub use member::create_test_member;
pub use user::create_test_user;
