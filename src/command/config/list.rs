use clap::Parser;
use hangar_config::{Config, Profile};

use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// List all configuration profiles
pub struct List {}

impl List {
    pub fn run(&self, config: Config) -> HangarResult<HangarOutput> {
        let profiles = Profile::list(&config)?;
        Ok(HangarOutput::Profiles(profiles))
    }
}
