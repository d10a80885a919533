use anyhow::anyhow;
use clap::Parser;
use hangar_config::{Config, Profile};
use hangar_std::{successln, Style};
use url::Url;

use crate::options::ProfileOpt;
use crate::{HangarError, HangarErrorSuggestion, HangarOutput, HangarResult};

#[derive(Debug, Parser)]
/// Authenticate a configuration profile with an API key
///
/// Running this command with a --profile <name> argument will create a new
/// profile that can be referenced by name across hangar with the --profile
/// <name> argument.
///
/// Running without the --profile flag will set an API key for
/// a profile named "default".
pub struct Auth {
    #[clap(flatten)]
    profile: ProfileOpt,

    /// Base URL of the hangar server this profile talks to
    #[arg(long = "api-url", value_parser = parse_api_url)]
    api_url: Option<String>,
}

impl Auth {
    pub fn run(&self, config: Config) -> HangarResult<HangarOutput> {
        let api_key = api_key_prompt()?;
        Profile::set_api_key(&self.profile.profile_name, &config, &api_key)?;
        if let Some(api_url) = &self.api_url {
            Profile::set_api_url(&self.profile.profile_name, &config, api_url)?;
        }
        Profile::get_credential(&self.profile.profile_name, &config)?;
        successln!(
            "Successfully saved API key to the {} profile.",
            Style::Command.paint(&self.profile.profile_name)
        );
        Ok(HangarOutput::EmptySuccess)
    }
}

fn parse_api_url(api_url: &str) -> Result<String, String> {
    match Url::parse(api_url) {
        Ok(url) if !url.cannot_be_a_base() => Ok(api_url.trim_end_matches('/').to_string()),
        Ok(_) => Err(format!("'{api_url}' cannot be used as a server URL")),
        Err(e) => Err(e.to_string()),
    }
}

fn api_key_prompt() -> HangarResult<String> {
    let term = console::Term::stderr();
    eprintln!("Copy an API key from your hangar server and paste it into the prompt below.");
    term.write_str("> ")?;
    let api_key = term.read_secure_line()?;
    validate(api_key)
}

fn validate(api_key: String) -> HangarResult<String> {
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        Err(anyhow!("Received an empty API Key. Please try again.").into())
    } else if api_key.as_bytes() == [22] {
        let mut err = HangarError::new(anyhow!("Your API key was not pasted successfully."));
        err.set_suggestion(HangarErrorSuggestion::Adhoc("Re-run this command, and when you are prompted to enter your API key, right click on the terminal and press paste instead of pressing Ctrl+V.".to_string()));
        Err(err)
    } else {
        Ok(api_key)
    }
}
