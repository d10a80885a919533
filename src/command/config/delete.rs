use clap::Parser;
use hangar_config::{Config, Profile};
use hangar_std::{successln, Style};

use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// Delete a configuration profile
///
/// WARNING: Deleting the `default` profile will result in
/// errors when running commands without specifying a `--profile`.
pub struct Delete {
    /// Name of the profile to delete
    name: String,
}

impl Delete {
    pub fn run(&self, config: Config) -> HangarResult<HangarOutput> {
        Profile::delete(&self.name, &config)?;
        successln!(
            "Successfully deleted profile '{}'",
            Style::Command.paint(&self.name)
        );
        Ok(HangarOutput::EmptySuccess)
    }
}
