/// "project-config delete" command execution
pub mod delete;

/// "project-config list" command execution
pub mod list;

use crate::blocking::ApiClient;
use crate::shared::ProjectConfig;
use crate::HangarClientError;

/// The project config endpoints of the hangar server.
///
/// Commands depend on this trait rather than on [ApiClient] so they can be
/// exercised without a server.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ProjectConfigApi {
    /// Fetches every project config known to the server.
    fn list_project_configs(&self) -> Result<Vec<ProjectConfig>, HangarClientError>;

    /// Deletes a single project config. `force` asks the server to delete it
    /// even when it is still in use.
    fn delete_project_config(&self, name: &str, force: bool) -> Result<(), HangarClientError>;
}

impl ProjectConfigApi for ApiClient {
    fn list_project_configs(&self) -> Result<Vec<ProjectConfig>, HangarClientError> {
        list::run(self)
    }

    fn delete_project_config(&self, name: &str, force: bool) -> Result<(), HangarClientError> {
        delete::run(
            delete::ProjectConfigDeleteInput {
                name: name.to_string(),
                force,
            },
            self,
        )
    }
}
