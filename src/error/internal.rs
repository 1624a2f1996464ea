use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An outbound network call did not finish in time.
    #[error("Timed out after {}s while trying to {operation}", .after.as_secs())]
    Timeout {
        /// Short description of the call, e.g. "send welcome message"
        operation: String,
        /// Time limit that was exceeded
        after: Duration,
    },
}
