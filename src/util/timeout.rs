use std::future::Future;
use std::time::Duration;

use crate::error::{internal::InternalError, AppError};

/// Limit for a single Discord REST call made by the bot.
pub const DISCORD_TIMEOUT: Duration = Duration::from_secs(15);

/// Awaits an outbound call with a time limit.
///
/// Every network call the bot makes on its own initiative (sending greetings,
/// syncing commands) goes through here so a stalled request cannot hang the
/// handler that issued it.
///
/// # Arguments
/// - `operation` - Short description used in the timeout error
/// - `after` - Time limit
/// - `future` - The call to await
///
/// # Returns
/// - `Ok(T)` - The call finished successfully in time
/// - `Err(AppError::InternalErr(Timeout))` - The time limit elapsed
/// - `Err(AppError)` - The call itself failed
pub async fn with_timeout<T, E, F>(operation: &str, after: Duration, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    AppError: From<E>,
{
    match tokio::time::timeout(after, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(InternalError::Timeout {
            operation: operation.to_string(),
            after,
        }
        .into()),
    }
}
