// #![deny(missing_docs)]

//! Blocking HTTP client for the hangar server API.

/// Module related to blocking http client.
pub mod blocking;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// Module for client related errors.
pub use error::HangarClientError;
pub use reqwest::StatusCode;

/// Module for the requests hangar makes against the server
pub mod operations;

/// Types shared across operations
pub mod shared;
