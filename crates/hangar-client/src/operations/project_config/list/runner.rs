use crate::blocking::ApiClient;
use crate::shared::ProjectConfig;
use crate::HangarClientError;

/// The main function to be used from this module. This function fetches
/// every project config from the server, in the order the server returns them.
pub fn run(client: &ApiClient) -> Result<Vec<ProjectConfig>, HangarClientError> {
    let url = client.endpoint(&["project-config"])?;
    let body = client.get(url)?.text()?;
    let project_configs = parse_project_configs(&body)?;
    tracing::debug!(count = project_configs.len(), "listed project configs");
    Ok(project_configs)
}

// an empty list may be serialized as `null`
fn parse_project_configs(body: &str) -> Result<Vec<ProjectConfig>, HangarClientError> {
    let project_configs: Option<Vec<ProjectConfig>> = serde_json::from_str(body)?;
    Ok(project_configs.unwrap_or_default())
}
