mod profile;
mod prompt;

pub use profile::ProfileOpt;
pub use prompt::{Prompter, TerminalPrompter};

#[cfg(test)]
pub use prompt::MockPrompter;
