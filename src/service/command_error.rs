//! Reporting failed slash commands back to the user.

use serenity::async_trait;

use crate::error::AppError;

/// The interaction a failed command came from.
#[async_trait]
pub trait CommandResponder: Send + Sync {
    /// Acknowledges the interaction so a follow-up can be sent.
    async fn defer(&self) -> Result<(), AppError>;

    /// Sends a follow-up message to the invoking user.
    async fn reply(&self, content: String) -> Result<(), AppError>;
}

/// Text shown to the user for a failed command.
///
/// Backticks in the error text are replaced so the message cannot break out
/// of Discord formatting; mentions are neutralized by the responder.
pub fn error_message(err: &AppError) -> String {
    format!(
        "Something went wrong when executing the command: {}",
        err.to_string().replace('`', "'")
    )
}

/// Tells the invoking user that their command failed.
///
/// Defers first, like any slow command would, then sends exactly one follow-up
/// containing the error text. A failed defer usually means the cog already
/// responded before failing, so the follow-up is still attempted.
///
/// # Returns
/// - `Ok(())` - The follow-up was delivered
/// - `Err(AppError)` - Discord rejected the follow-up
pub async fn report(responder: &dyn CommandResponder, err: &AppError) -> Result<(), AppError> {
    if let Err(defer_err) = responder.defer().await {
        tracing::debug!("Could not defer failed interaction: {}", defer_err);
    }

    responder.reply(error_message(err)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::cog::CogError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingResponder {
        defer_fails: bool,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CommandResponder for RecordingResponder {
        async fn defer(&self) -> Result<(), AppError> {
            self.calls.lock().unwrap().push("defer".to_string());
            if self.defer_fails {
                return Err(AppError::BadRequest("already acknowledged".to_string()));
            }
            Ok(())
        }

        async fn reply(&self, content: String) -> Result<(), AppError> {
            self.calls.lock().unwrap().push(content);
            Ok(())
        }
    }

    #[tokio::test]
    async fn defers_then_replies_once_with_error_text() {
        let responder = RecordingResponder::default();
        let err = AppError::CogErr(CogError::UnknownCommand("stats".to_string()));

        report(&responder, &err).await.unwrap();

        let calls = responder.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], "defer");
        assert!(calls[1].contains("No loaded cog handles the '/stats' command"));
    }

    #[tokio::test]
    async fn replies_even_when_defer_fails() {
        let responder = RecordingResponder {
            defer_fails: true,
            ..Default::default()
        };
        let err = AppError::BadRequest("Pick a text channel".to_string());

        report(&responder, &err).await.unwrap();

        let calls = responder.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                "defer".to_string(),
                "Something went wrong when executing the command: Pick a text channel"
                    .to_string()
            ]
        );
    }

    #[test]
    fn escapes_backticks() {
        let err = AppError::BadRequest("bad `code`".to_string());

        assert_eq!(
            error_message(&err),
            "Something went wrong when executing the command: bad 'code'"
        );
    }
}
