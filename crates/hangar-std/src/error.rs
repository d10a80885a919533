use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangarStdError {
    /// A prompt was needed but stderr is not attached to a terminal.
    #[error("Cannot prompt to {operation} because the terminal is not interactive.")]
    NonInteractiveTerminal {
        /// What the prompt was about to ask for
        operation: String,
    },

    /// The prompt itself failed, usually because the terminal went away.
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),

    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),
}
