mod delete;
mod list;

pub use delete::{BulkDeleteReport, DeletionOutcome};

use clap::{Parser, Subcommand};

use crate::options::TerminalPrompter;
use crate::utils::client::ApiClientConfig;
use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
pub struct ProjectConfigs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Delete one or all project configs
    #[command(visible_aliases = ["remove", "rm"])]
    Delete(delete::Delete),

    /// List the project configs known to the server
    #[command(visible_alias = "ls")]
    List(list::List),
}

impl ProjectConfigs {
    pub fn run(&self, client_config: ApiClientConfig) -> HangarResult<HangarOutput> {
        match &self.command {
            Command::Delete(command) => command.run(client_config, &TerminalPrompter),
            Command::List(command) => command.run(client_config),
        }
    }
}
