#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(missing_docs)]

//! Utilites for configuring the hangar CLI: where its configuration lives,
//! and the named profiles that hold an API key and a server URL.

mod config;
mod error;
mod profile;

pub use config::Config;
pub use error::HangarConfigProblem;

pub use profile::mask_key;
/// Utilites for saving, loading, and deleting configuration profiles.
pub use profile::{Credential, CredentialOrigin, Profile, ProfileData, DEFAULT_API_URL};
