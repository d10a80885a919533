use clap::Parser;
use hangar_config::Config;
use hangar_std::successln;

use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// Clear ALL configuration
///
/// WARNING: This command will delete ALL configuration profiles, not just one.
pub struct Clear {}

impl Clear {
    pub fn run(&self, config: Config) -> HangarResult<HangarOutput> {
        config.clear()?;
        successln!("Successfully cleared all configuration.");
        Ok(HangarOutput::EmptySuccess)
    }
}
