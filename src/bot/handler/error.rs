use std::error::Error;

use crate::error::AppError;

/// Logs a failure that escaped an event handler.
///
/// Handler failures never propagate; the gateway keeps delivering events.
pub fn handle_error(event: &str, err: &AppError) {
    let causes = error_chain(err);
    tracing::error!(
        event = %event,
        error = ?err,
        causes = ?causes,
        "[{}] We have gone under a crisis!!! {}",
        event,
        err
    );
}

/// Messages of the errors that caused `err`, outermost first.
pub fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = err.source();

    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    causes
}
