use clap::Parser;
use hangar_config::{mask_key, Config, Profile, DEFAULT_API_URL};

use crate::options::ProfileOpt;
use crate::{HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// View a configuration profile's details
///
/// The API key is masked. Pass --sensitive to see all of it.
pub struct Show {
    #[clap(flatten)]
    profile: ProfileOpt,

    /// Print the API key without masking it
    #[arg(long)]
    sensitive: bool,
}

impl Show {
    pub fn run(&self, config: Config) -> HangarResult<HangarOutput> {
        let profile = Profile::load(&self.profile.profile_name, &config)?;
        let api_key = profile.api_key().map(|api_key| {
            if self.sensitive {
                api_key.to_string()
            } else {
                mask_key(api_key)
            }
        });
        let api_url = profile
            .data
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(HangarOutput::ProfileDetails {
            name: self.profile.profile_name.clone(),
            api_key,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;

    use super::*;

    fn get_config(temp: &TempDir) -> Config {
        let home = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        Config::new(Some(home), None, None).unwrap()
    }

    fn show(sensitive: bool) -> Show {
        Show {
            profile: ProfileOpt::default(),
            sensitive,
        }
    }

    #[test]
    fn it_masks_the_api_key_by_default() {
        let temp = TempDir::new().unwrap();
        let config = get_config(&temp);
        Profile::set_api_key("default", &config, "abcdefghijkl").unwrap();

        match show(false).run(config).unwrap() {
            HangarOutput::ProfileDetails {
                api_key, api_url, ..
            } => {
                assert_eq!(api_key.as_deref(), Some("abcd****ijkl"));
                assert_eq!(api_url, DEFAULT_API_URL);
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn it_reveals_the_api_key_when_asked() {
        let temp = TempDir::new().unwrap();
        let config = get_config(&temp);
        Profile::set_api_key("default", &config, "abcdefghijkl").unwrap();
        Profile::set_api_url("default", &config, "http://hangar.internal:3986").unwrap();

        match show(true).run(config).unwrap() {
            HangarOutput::ProfileDetails {
                api_key, api_url, ..
            } => {
                assert_eq!(api_key.as_deref(), Some("abcdefghijkl"));
                assert_eq!(api_url, "http://hangar.internal:3986");
            }
            other => panic!("unexpected output {other:?}"),
        }
    }
}
