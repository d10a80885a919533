use crate::blocking::ApiClient;
use crate::operations::project_config::delete::ProjectConfigDeleteInput;
use crate::HangarClientError;

/// The main function to be used from this module.
/// This function deletes a single project config from the server.
pub fn run(input: ProjectConfigDeleteInput, client: &ApiClient) -> Result<(), HangarClientError> {
    let url = client.endpoint(&["project-config", &input.name])?;
    tracing::debug!(name = %input.name, force = input.force, "deleting project config");
    // the response body of a successful delete carries nothing we need
    client.delete(url, &input.query())?;
    Ok(())
}
