use std::fmt::{self, Display};

use hangar_std::Style;

use crate::utils::env::HangarEnvKey;

/// `HangarErrorSuggestion` contains possible suggestions for remedying specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangarErrorSuggestion {
    SubmitIssue,
    CheckServerConnection { url: String },
    CheckApiUrl,
    CheckKey,
    ListProjectConfigs,
    RetryWithForce,
    NewUserNoProfiles,
    ListProfiles,
    SetConfigHome,
    RerunWithYes,
    ProvideProjectConfigName,
    Adhoc(String),
}

impl Display for HangarErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HangarErrorSuggestion::*;

        let suggestion = match self {
            SubmitIssue => {
                format!(
                    "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do: {}",
                    Style::Link.paint("https://github.com/hangar-dev/hangar/issues/new")
                )
            }
            CheckServerConnection { url } => {
                format!(
                    "Make sure the hangar server is running at {}, or point {} at another one.",
                    Style::Link.paint(url),
                    Style::Command.paint(format!("${}", HangarEnvKey::ApiUrl))
                )
            }
            CheckApiUrl => {
                format!(
                    "Set a valid server URL with {} or {}.",
                    Style::Command.paint("`hangar config auth --api-url <URL>`"),
                    Style::Command.paint(format!("${}", HangarEnvKey::ApiUrl))
                )
            }
            CheckKey => {
                format!(
                    "Check your API key with {}, or set a new one with {}.",
                    Style::Command.paint("`hangar config show`"),
                    Style::Command.paint("`hangar config auth`")
                )
            }
            ListProjectConfigs => {
                format!(
                    "Run {} to see the project configs that exist.",
                    Style::Command.paint("`hangar project-config list`")
                )
            }
            RetryWithForce => {
                format!(
                    "The project config may still be in use. Re-run with {} to delete it anyway.",
                    Style::Command.paint("`--force`")
                )
            }
            NewUserNoProfiles => {
                format!(
                    "It looks like you may be new here. Set up a profile by running {}, or set {}.",
                    Style::Command.paint("`hangar config auth`"),
                    Style::Command.paint(format!("${}", HangarEnvKey::ApiKey))
                )
            }
            ListProfiles => {
                format!(
                    "Try running {} to see the possible values for the {} argument.",
                    Style::Command.paint("`hangar config list`"),
                    Style::Command.paint("`--profile`")
                )
            }
            SetConfigHome => {
                format!(
                    "You can override the default configuration directory by setting {} to a directory.",
                    Style::Command.paint(format!("${}", HangarEnvKey::ConfigHome))
                )
            }
            RerunWithYes => {
                format!(
                    "Re-run this command in an interactive terminal, or pass {} to skip the confirmation.",
                    Style::Command.paint("`--yes`")
                )
            }
            ProvideProjectConfigName => {
                format!(
                    "Re-run this command in an interactive terminal, or pass the {} of the project config to delete.",
                    Style::Command.paint("NAME")
                )
            }
            Adhoc(msg) => msg.to_string(),
        };
        write!(formatter, "{}", &suggestion)
    }
}
