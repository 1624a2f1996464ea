//! Business logic behind the bot's event handlers.
//!
//! Services own the decisions (whether a greeting goes out, what an error reply
//! says) and talk to Discord only through the small traits they define, which
//! the `bot` module implements on top of Serenity.

pub mod command_error;
pub mod greeting;
