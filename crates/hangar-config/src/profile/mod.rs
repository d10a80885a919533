mod sensitive;

use crate::{Config, HangarConfigProblem};
use camino::{Utf8Path, Utf8PathBuf};
use sensitive::Sensitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// Server used when neither the environment nor the profile names one.
pub const DEFAULT_API_URL: &str = "http://localhost:3986";

const PROFILE_DATA_FILE: &str = "profile.toml";

/// Non-sensitive settings stored for a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    /// Base URL of the hangar server this profile talks to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Collects configuration related to a profile.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Non-sensitive settings
    pub data: ProfileData,
    sensitive: Option<Sensitive>,
}

/// Where an API key was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// The `HANGAR_API_KEY` environment variable
    EnvVar,
    /// The `.sensitive` file of the named profile
    ConfigFile(String),
}

/// An API key plus its origin, used to authenticate requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// The API key itself
    pub api_key: String,
    /// Where the key came from
    pub origin: CredentialOrigin,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &mask_key(&self.api_key))
            .field("origin", &self.origin)
            .finish()
    }
}

impl Profile {
    fn base_dir(config: &Config) -> Utf8PathBuf {
        config.home.join("profiles")
    }

    /// Resolves `$HANGAR_CONFIG_HOME/profiles/<name>`.
    ///
    /// The name must be a single path component so every profile stays
    /// inside the profiles directory.
    pub(crate) fn dir(name: &str, config: &Config) -> Result<Utf8PathBuf, HangarConfigProblem> {
        let is_single_component = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && Utf8Path::new(name).file_name() == Some(name);
        if !is_single_component {
            return Err(HangarConfigProblem::InvalidProfileName(name.to_string()));
        }
        Ok(Profile::base_dir(config).join(name))
    }

    fn data_path(name: &str, config: &Config) -> Result<Utf8PathBuf, HangarConfigProblem> {
        Ok(Profile::dir(name, config)?.join(PROFILE_DATA_FILE))
    }

    /// Returns the API key stored in this profile, if one was saved.
    pub fn api_key(&self) -> Option<&str> {
        self.sensitive.as_ref().map(|sensitive| sensitive.api_key.as_str())
    }

    /// Writes an api_key to the filesystem (`$HANGAR_CONFIG_HOME/profiles/<profile_name>/.sensitive`).
    pub fn set_api_key(name: &str, config: &Config, api_key: &str) -> Result<(), HangarConfigProblem> {
        config.ensure_home()?;
        Sensitive {
            api_key: api_key.to_string(),
        }
        .save(name, config)
    }

    /// Writes the server URL to `$HANGAR_CONFIG_HOME/profiles/<profile_name>/profile.toml`,
    /// keeping any other non-sensitive settings already stored there.
    pub fn set_api_url(name: &str, config: &Config, api_url: &str) -> Result<(), HangarConfigProblem> {
        config.ensure_home()?;
        let mut data = Profile::load_data(name, config)?.unwrap_or_default();
        data.api_url = Some(api_url.to_string());

        let path = Profile::data_path(name, config)?;
        if let Some(dirs) = &path.parent() {
            fs::create_dir_all(dirs)?;
        }
        fs::write(&path, toml::to_string(&data)?)?;
        tracing::debug!(path = %path, api_url, "wrote profile data");
        Ok(())
    }

    /// Returns a credential for interacting with the hangar server.
    ///
    /// An API key from `HANGAR_API_KEY` wins over anything stored on disk.
    pub fn get_credential(name: &str, config: &Config) -> Result<Credential, HangarConfigProblem> {
        if let Some(api_key) = &config.override_api_key {
            tracing::debug!("using API key from the environment");
            return Ok(Credential {
                api_key: api_key.to_string(),
                origin: CredentialOrigin::EnvVar,
            });
        }

        let profile = Profile::load(name, config)?;
        match profile.sensitive {
            Some(sensitive) => Ok(Credential {
                api_key: sensitive.api_key,
                origin: CredentialOrigin::ConfigFile(name.to_string()),
            }),
            None => Err(HangarConfigProblem::ProfileNotFound(name.to_string())),
        }
    }

    /// Returns the base URL of the hangar server for a profile.
    ///
    /// `HANGAR_API_URL` wins, then the profile's `api_url`, then
    /// [`DEFAULT_API_URL`]. A missing profile is not an error here; the
    /// credential lookup reports it.
    pub fn get_api_url(name: &str, config: &Config) -> Result<String, HangarConfigProblem> {
        if let Some(api_url) = &config.override_api_url {
            return Ok(api_url.to_string());
        }

        let api_url = Profile::load_data(name, config)?
            .and_then(|data| data.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(api_url)
    }

    /// Loads and deserializes configuration from the file system for a
    /// specific profile.
    pub fn load(name: &str, config: &Config) -> Result<Profile, HangarConfigProblem> {
        if !Profile::dir(name, config)?.exists() {
            return if Profile::list(config)?.is_empty() {
                Err(HangarConfigProblem::NoConfigProfiles)
            } else {
                Err(HangarConfigProblem::ProfileNotFound(name.to_string()))
            };
        }

        Ok(Profile {
            data: Profile::load_data(name, config)?.unwrap_or_default(),
            sensitive: Sensitive::load(name, config)?,
        })
    }

    fn load_data(name: &str, config: &Config) -> Result<Option<ProfileData>, HangarConfigProblem> {
        let path = Profile::data_path(name, config)?;
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(toml::from_str(&contents)?))
    }

    /// Deletes profile data from file system.
    pub fn delete(name: &str, config: &Config) -> Result<(), HangarConfigProblem> {
        let dir = Profile::dir(name, config)?;
        if !dir.exists() {
            return Err(HangarConfigProblem::ProfileNotFound(name.to_string()));
        }
        tracing::debug!(dir = %dir, "deleting profile");
        Ok(fs::remove_dir_all(dir)?)
    }

    /// Lists profiles based on directories in `$HANGAR_CONFIG_HOME/profiles`
    pub fn list(config: &Config) -> Result<Vec<String>, HangarConfigProblem> {
        let profiles_dir = Profile::base_dir(config);
        let mut profiles = vec![];

        // if profiles dir doesn't exist return empty vec
        if !profiles_dir.exists() {
            return Ok(profiles);
        }

        for entry in profiles_dir.read_dir_utf8()? {
            let entry = entry?;
            if entry.path().is_dir() {
                tracing::debug!(profile = entry.file_name(), "detected profile");
                profiles.push(entry.file_name().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

/// Masks all but the first and last four characters of an API key so it can
/// be printed or logged. Keys of eight characters or fewer are masked
/// entirely.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}
