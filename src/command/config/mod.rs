mod auth;
mod clear;
mod delete;
mod list;
mod show;

use clap::{Parser, Subcommand};
use hangar_config::Config as HangarConfig;

use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
pub struct Config {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate a configuration profile with an API key
    Auth(auth::Auth),

    /// Clear ALL configuration profiles
    Clear(clear::Clear),

    /// Delete a configuration profile
    Delete(delete::Delete),

    /// List all configuration profiles
    List(list::List),

    /// View a configuration profile's details
    Show(show::Show),
}

impl Config {
    pub fn run(&self, config: HangarConfig) -> HangarResult<HangarOutput> {
        match &self.command {
            Command::Auth(command) => command.run(config),
            Command::Clear(command) => command.run(config),
            Command::Delete(command) => command.run(config),
            Command::List(command) => command.run(config),
            Command::Show(command) => command.run(config),
        }
    }
}
