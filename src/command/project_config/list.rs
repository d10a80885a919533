use clap::Parser;
use hangar_client::operations::project_config::ProjectConfigApi;

use crate::options::ProfileOpt;
use crate::utils::client::ApiClientConfig;
use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// List the project configs known to the server
pub struct List {
    #[clap(flatten)]
    profile: ProfileOpt,
}

impl List {
    pub fn run(&self, client_config: ApiClientConfig) -> HangarResult<HangarOutput> {
        let client = client_config.get_authenticated_client(&self.profile)?;
        self.execute(&client)
    }

    fn execute(&self, client: &dyn ProjectConfigApi) -> HangarResult<HangarOutput> {
        let project_configs = client.list_project_configs()?;
        tracing::debug!(count = project_configs.len(), "listed project configs");
        Ok(HangarOutput::ProjectConfigList(project_configs))
    }
}
