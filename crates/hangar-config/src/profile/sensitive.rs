use crate::{mask_key, profile::Profile, Config, HangarConfigProblem};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::{fmt, fs};

/// Holds sensitive information regarding authentication.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct Sensitive {
    pub(crate) api_key: String,
}

impl fmt::Debug for Sensitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sensitive")
            .field("api_key", &mask_key(&self.api_key))
            .finish()
    }
}

impl Sensitive {
    fn path(profile_name: &str, config: &Config) -> Result<Utf8PathBuf, HangarConfigProblem> {
        Ok(Profile::dir(profile_name, config)?.join(".sensitive"))
    }

    /// Serializes to toml and saves to file system at `$HANGAR_CONFIG_HOME/profiles/<profile_name>/.sensitive`.
    pub(crate) fn save(&self, profile_name: &str, config: &Config) -> Result<(), HangarConfigProblem> {
        let path = Sensitive::path(profile_name, config)?;
        let data = toml::to_string(self)?;

        if let Some(dirs) = &path.parent() {
            fs::create_dir_all(dirs)?;
        }

        fs::write(&path, data)?;
        tracing::debug!(path = %path, "wrote sensitive profile data");
        Ok(())
    }

    /// Opens and deserializes `$HANGAR_CONFIG_HOME/profiles/<profile_name>/.sensitive`.
    pub(crate) fn load(profile_name: &str, config: &Config) -> Result<Option<Sensitive>, HangarConfigProblem> {
        let path = Sensitive::path(profile_name, config)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        tracing::debug!(path = %path, "read sensitive profile data");
        Ok(Some(toml::from_str(&contents)?))
    }
}
