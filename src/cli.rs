use camino::Utf8PathBuf;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};
use hangar_config::Config;
use timber::{Level, LEVELS};

use crate::command::{self, HangarOutput};
use crate::utils::client::ApiClientConfig;
use crate::utils::env::{HangarEnv, HangarEnvKey};
use crate::HangarResult;

#[derive(Debug, Parser)]
#[command(
    name = "hangar",
    version,
    about = "
Hangar - the command-line companion for your hangar server

To authenticate with a hangar server, run the following command:

    $ hangar config auth

This will prompt you for an API key and store it in a configuration profile.

The most common commands from there are:

    - hangar project-config list: List the project configs known to the server
    - hangar project-config delete: Delete one, or all, project configs
"
)]
pub struct Hangar {
    #[command(subcommand)]
    pub command: Command,

    /// Specify hangar's log level
    #[arg(
        long = "log",
        short = 'l',
        global = true,
        ignore_case = true,
        value_parser = PossibleValuesParser::new(LEVELS).try_map(|level| level.parse::<Level>())
    )]
    pub log_level: Option<Level>,

    #[arg(skip)]
    env_store: HangarEnv,
}

impl Hangar {
    pub fn run(&self) -> HangarResult<HangarOutput> {
        match &self.command {
            Command::Config(command) => command.run(self.get_hangar_config()?),
            Command::ProjectConfig(command) => command.run(self.get_client_config()?),
        }
    }

    pub(crate) fn get_hangar_config(&self) -> HangarResult<Config> {
        let override_home: Option<Utf8PathBuf> = self
            .env_store
            .get(HangarEnvKey::ConfigHome)?
            .map(|p| Utf8PathBuf::from(&p));
        let override_api_key = self.env_store.get(HangarEnvKey::ApiKey)?;
        let override_api_url = self.env_store.get(HangarEnvKey::ApiUrl)?;
        Ok(Config::new(override_home, override_api_key, override_api_url)?)
    }

    pub(crate) fn get_client_config(&self) -> HangarResult<ApiClientConfig> {
        Ok(ApiClientConfig::new(self.get_hangar_config()?))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration profile commands
    Config(command::Config),

    /// Project config commands
    #[command(visible_alias = "pc")]
    ProjectConfig(command::ProjectConfigs),
}
