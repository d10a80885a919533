use camino::Utf8PathBuf;
use directories_next::ProjectDirs;

use crate::HangarConfigProblem;

use std::fs;

/// Config allows end users to override default settings
/// usually determined by hangar-config. They are intended to
/// give library consumers a way to support environment variable
/// overrides for end users.
#[derive(Debug, Clone)]
pub struct Config {
    /// home is the path to the user's global config directory
    pub home: Utf8PathBuf,

    /// override_api_key is used for overriding the API key returned
    /// when loading a profile
    pub override_api_key: Option<String>,

    /// override_api_url is used for overriding the server URL returned
    /// when loading a profile
    pub override_api_url: Option<String>,
}

impl Config {
    /// Creates a new instance of `Config`
    pub fn new(
        override_home: Option<Utf8PathBuf>,
        override_api_key: Option<String>,
        override_api_url: Option<String>,
    ) -> Result<Config, HangarConfigProblem> {
        let home = match override_home {
            Some(home) => {
                if home.exists() && !home.is_dir() {
                    return Err(HangarConfigProblem::InvalidOverrideConfigDir(
                        home.to_string(),
                    ));
                }
                home
            }
            None => {
                // Lin: /home/alice/.config/hangar
                // Win: C:\Users\Alice\AppData\Roaming\Hangar\Hangar\config
                // Mac: /Users/Alice/Library/Application Support/dev.Hangar.Hangar
                let project_dirs = ProjectDirs::from("dev", "Hangar", "Hangar")
                    .ok_or(HangarConfigProblem::DefaultConfigDirNotFound)?;
                Utf8PathBuf::try_from(project_dirs.config_dir().to_path_buf())?
            }
        };

        tracing::debug!(config_home = %home);

        Ok(Config {
            home,
            override_api_key,
            override_api_url,
        })
    }

    /// Creates the config home if it does not exist yet.
    pub(crate) fn ensure_home(&self) -> Result<(), HangarConfigProblem> {
        if !self.home.exists() {
            fs::create_dir_all(&self.home)
                .map_err(|_| HangarConfigProblem::CouldNotCreateConfigHome(self.home.to_string()))?;
        }
        Ok(())
    }

    /// Removes all configuration files from filesystem
    pub fn clear(&self) -> Result<(), HangarConfigProblem> {
        tracing::debug!(home_dir = ?self.home);
        fs::remove_dir_all(&self.home)
            .map_err(|_| HangarConfigProblem::NoConfigFound(self.home.to_string()))
    }
}
