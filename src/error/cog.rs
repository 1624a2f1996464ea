use thiserror::Error;

/// Errors raised while activating cogs or routing commands to them.
#[derive(Error, Debug)]
pub enum CogError {
    /// The cog's factory refused to build it.
    #[error("{0}")]
    Setup(String),

    /// Another loaded cog already owns a command with this name.
    #[error("Command '/{command}' is already provided by the {owner} cog")]
    DuplicateCommand {
        /// Name of the clashing command
        command: String,
        /// Cog that registered the command first
        owner: String,
    },

    /// A slash command arrived that no loaded cog handles.
    ///
    /// Happens when commands synced by an earlier run are still registered on
    /// Discord but their cog is no longer enabled.
    #[error("No loaded cog handles the '/{0}' command")]
    UnknownCommand(String),
}
