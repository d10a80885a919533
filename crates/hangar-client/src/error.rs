use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// HangarClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum HangarClientError {
    /// The server answered with a non-success status code.
    #[error("the server responded with {status}: {msg}")]
    ApiError {
        /// The status code of the response.
        status: StatusCode,
        /// The message extracted from the response body.
        msg: String,
    },

    /// The server could not be reached at all.
    #[error("could not connect to the hangar server at {url}")]
    CouldNotConnect {
        /// The URL that was being requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Encountered an error sending the request.
    #[error("encountered an error while sending a request")]
    SendRequest(#[from] reqwest::Error),

    /// The response body could not be parsed.
    #[error("could not parse JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// Tried to build a [HeaderMap](reqwest::header::HeaderMap) with an invalid header value.
    #[error("invalid header value")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The configured API URL cannot be used as a base for requests.
    #[error("'{url}' is not a valid hangar server URL")]
    InvalidUrl {
        /// The offending URL.
        url: String,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

impl HangarClientError {
    /// Translates a failed response into a displayable error, using the
    /// server's message when the body carries one.
    pub fn from_error_response(status: StatusCode, body: &str) -> Self {
        HangarClientError::ApiError {
            status,
            msg: error_message(status, body),
        }
    }

    /// The status code of the response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HangarClientError::ApiError { status, .. } => Some(*status),
            HangarClientError::SendRequest(e) => e.status(),
            _ => None,
        }
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        if !error.trim().is_empty() {
            return error.trim().to_string();
        }
    }
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
