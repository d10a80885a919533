use crate::HangarClientError;
use hangar_config::Credential;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

const JSON_CONTENT_TYPE: &str = "application/json";
const CLIENT_NAME: &str = "hangar";

/// Function for building a [HeaderMap] for making requests to the hangar
/// server. The API key is marked as sensitive so it never shows up in
/// debug output.
///
/// Takes a `credential` and a `client_version`, and returns a [HeaderMap].
pub fn build_api_headers(
    credential: &Credential,
    client_version: &str,
) -> Result<HeaderMap, HangarClientError> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    tracing::debug!(?client_version);
    let user_agent = HeaderValue::from_str(&format!("{CLIENT_NAME}/{client_version}"))?;
    headers.insert(USER_AGENT, user_agent);

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", credential.api_key))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(headers)
}
