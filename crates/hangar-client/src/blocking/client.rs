use crate::headers;
use crate::HangarClientError;
use hangar_config::Credential;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use url::Url;

/// Builds the underlying reqwest client shared by every request.
pub fn get_client() -> Result<Client, HangarClientError> {
    Ok(Client::builder().gzip(true).build()?)
}

/// Represents a client for making authenticated requests to a hangar server.
#[derive(Debug)]
pub struct ApiClient {
    credential: Credential,
    base_url: Url,
    version: String,
    client: Client,
}

impl ApiClient {
    /// Construct a new [ApiClient] from a `credential`, the server's base
    /// `api_url`, the client `version` and a reqwest `client`.
    pub fn new(
        credential: Credential,
        api_url: &str,
        version: &str,
        client: Client,
    ) -> Result<ApiClient, HangarClientError> {
        let base_url = Url::parse(api_url).map_err(|_| HangarClientError::InvalidUrl {
            url: api_url.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HangarClientError::InvalidUrl {
                url: api_url.to_string(),
            });
        }
        Ok(ApiClient {
            credential,
            base_url,
            version: version.to_string(),
            client,
        })
    }

    /// Appends percent-encoded path segments to the server's base URL.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, HangarClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HangarClientError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> Result<Response, HangarClientError> {
        self.execute(self.client.get(url))
    }

    pub(crate) fn delete<Q: Serialize + ?Sized>(
        &self,
        url: Url,
        query: &Q,
    ) -> Result<Response, HangarClientError> {
        self.execute(self.client.delete(url).query(query))
    }

    fn execute(&self, request: RequestBuilder) -> Result<Response, HangarClientError> {
        let h = headers::build_api_headers(&self.credential, &self.version)?;
        let request = request.headers(h).build()?;
        let url = request.url().to_string();
        tracing::debug!(method = %request.method(), url = %url, "sending request");
        tracing::trace!(request_headers = ?request.headers());

        let response = self.client.execute(request).map_err(|e| {
            if e.is_connect() {
                HangarClientError::CouldNotConnect {
                    url: url.clone(),
                    source: e,
                }
            } else {
                HangarClientError::SendRequest(e)
            }
        })?;
        tracing::trace!(response_status = ?response.status(), response_headers = ?response.headers());

        ApiClient::handle_response(response)
    }

    /// To be used internally by operations.
    ///
    /// Passes successful responses through and turns everything else into
    /// a [HangarClientError::ApiError] carrying the server's message.
    pub(crate) fn handle_response(response: Response) -> Result<Response, HangarClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        tracing::debug!(%status, body = %body, "server returned an error");
        Err(HangarClientError::from_error_response(status, &body))
    }
}
