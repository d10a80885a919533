use hangar_client::blocking::{get_client, ApiClient};
use hangar_config::{Config, Profile};

use crate::options::ProfileOpt;
use crate::{HangarResult, PKG_VERSION};

/// Everything needed to build an authenticated [ApiClient] for a profile.
pub struct ApiClientConfig {
    pub config: Config,
    version: String,
}

impl ApiClientConfig {
    pub fn new(config: Config) -> ApiClientConfig {
        let version = if cfg!(debug_assertions) {
            format!("{} (dev)", PKG_VERSION)
        } else {
            PKG_VERSION.to_string()
        };

        ApiClientConfig { config, version }
    }

    pub fn get_authenticated_client(&self, profile: &ProfileOpt) -> HangarResult<ApiClient> {
        let credential = Profile::get_credential(&profile.profile_name, &self.config)?;
        let api_url = Profile::get_api_url(&profile.profile_name, &self.config)?;
        tracing::debug!(profile = %profile, api_url = %api_url, origin = ?credential.origin);
        Ok(ApiClient::new(
            credential,
            &api_url,
            &self.version,
            get_client()?,
        )?)
    }
}
