mod code;
mod suggestion;

pub use code::HangarErrorCode;
pub use suggestion::HangarErrorSuggestion;

use hangar_client::{HangarClientError, StatusCode};
use hangar_config::HangarConfigProblem;
use hangar_std::HangarStdError;

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Debug, Clone)]
pub struct HangarErrorMetadata {
    pub suggestion: Option<HangarErrorSuggestion>,
    pub code: Option<HangarErrorCode>,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for HangarErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        use HangarErrorCode as Code;
        use HangarErrorSuggestion as Suggestion;

        if let Some(client_error) = error.downcast_ref::<HangarClientError>() {
            let (suggestion, code) = match client_error {
                HangarClientError::CouldNotConnect { url, .. } => (
                    Some(Suggestion::CheckServerConnection { url: url.clone() }),
                    Some(Code::E001),
                ),
                HangarClientError::SendRequest(_) => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E002))
                }
                HangarClientError::InvalidJson(_) => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E003))
                }
                HangarClientError::InvalidHeaderValue(_) => {
                    (Some(Suggestion::CheckKey), Some(Code::E004))
                }
                HangarClientError::InvalidUrl { .. } => {
                    (Some(Suggestion::CheckApiUrl), Some(Code::E005))
                }
                HangarClientError::ApiError { status, .. } => match *status {
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                        (Some(Suggestion::CheckKey), Some(Code::E006))
                    }
                    StatusCode::NOT_FOUND => {
                        (Some(Suggestion::ListProjectConfigs), Some(Code::E007))
                    }
                    StatusCode::CONFLICT => (Some(Suggestion::RetryWithForce), Some(Code::E008)),
                    _ => (None, Some(Code::E009)),
                },
            };
            return HangarErrorMetadata { suggestion, code };
        }

        if let Some(config_problem) = error.downcast_ref::<HangarConfigProblem>() {
            let (suggestion, code) = match config_problem {
                HangarConfigProblem::CouldNotCreateConfigHome(_) => {
                    (Some(Suggestion::SetConfigHome), Some(Code::E010))
                }
                HangarConfigProblem::DefaultConfigDirNotFound => {
                    (Some(Suggestion::SetConfigHome), Some(Code::E011))
                }
                HangarConfigProblem::InvalidOverrideConfigDir(_) => {
                    (Some(Suggestion::SetConfigHome), Some(Code::E012))
                }
                HangarConfigProblem::NoConfigFound(_) => {
                    (Some(Suggestion::NewUserNoProfiles), Some(Code::E013))
                }
                HangarConfigProblem::NoConfigProfiles => {
                    (Some(Suggestion::NewUserNoProfiles), Some(Code::E014))
                }
                HangarConfigProblem::ProfileNotFound(_) => {
                    (Some(Suggestion::ListProfiles), Some(Code::E015))
                }
                HangarConfigProblem::InvalidProfileName(_) => {
                    (Some(Suggestion::ListProfiles), Some(Code::E021))
                }
                HangarConfigProblem::PathNotUtf8(_) => {
                    (Some(Suggestion::SetConfigHome), Some(Code::E016))
                }
                HangarConfigProblem::TomlSerialization(_)
                | HangarConfigProblem::TomlDeserialization(_) => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E017))
                }
                HangarConfigProblem::IoError(_) => {
                    (Some(Suggestion::SubmitIssue), Some(Code::E018))
                }
            };
            return HangarErrorMetadata { suggestion, code };
        }

        if let Some(std_error) = error.downcast_ref::<HangarStdError>() {
            let (suggestion, code) = match std_error {
                HangarStdError::NonInteractiveTerminal { .. } => (None, Some(Code::E019)),
                HangarStdError::Prompt(_) => (None, Some(Code::E020)),
                HangarStdError::AdhocError(_) => (None, None),
            };
            return HangarErrorMetadata { suggestion, code };
        }

        HangarErrorMetadata::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn metadata_for<E: Into<anyhow::Error>>(error: E) -> HangarErrorMetadata {
        let mut error = error.into();
        HangarErrorMetadata::from(&mut error)
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, HangarErrorCode::E006, Some(HangarErrorSuggestion::CheckKey))]
    #[case(StatusCode::FORBIDDEN, HangarErrorCode::E006, Some(HangarErrorSuggestion::CheckKey))]
    #[case(
        StatusCode::NOT_FOUND,
        HangarErrorCode::E007,
        Some(HangarErrorSuggestion::ListProjectConfigs)
    )]
    #[case(
        StatusCode::CONFLICT,
        HangarErrorCode::E008,
        Some(HangarErrorSuggestion::RetryWithForce)
    )]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, HangarErrorCode::E009, None)]
    fn it_classifies_api_errors_by_status(
        #[case] status: StatusCode,
        #[case] code: HangarErrorCode,
        #[case] suggestion: Option<HangarErrorSuggestion>,
    ) {
        let metadata = metadata_for(HangarClientError::from_error_response(status, "nope"));
        assert_eq!(metadata.code, Some(code));
        assert_eq!(metadata.suggestion, suggestion);
    }

    #[test]
    fn it_suggests_auth_for_new_users() {
        let metadata = metadata_for(HangarConfigProblem::NoConfigProfiles);
        assert_eq!(metadata.code, Some(HangarErrorCode::E014));
        assert_eq!(
            metadata.suggestion,
            Some(HangarErrorSuggestion::NewUserNoProfiles)
        );
    }

    #[test]
    fn it_points_invalid_profile_names_at_the_profile_list() {
        let metadata = metadata_for(HangarConfigProblem::InvalidProfileName("..".to_string()));
        assert_eq!(metadata.code, Some(HangarErrorCode::E021));
        assert_eq!(metadata.suggestion, Some(HangarErrorSuggestion::ListProfiles));
    }

    #[test]
    fn it_codes_non_interactive_terminals() {
        let metadata = metadata_for(HangarStdError::NonInteractiveTerminal {
            operation: "confirm".to_string(),
        });
        assert_eq!(metadata.code, Some(HangarErrorCode::E019));
        assert_eq!(metadata.suggestion, None);
    }

    #[test]
    fn it_leaves_adhoc_errors_alone() {
        let metadata = metadata_for(anyhow::anyhow!("something else"));
        assert_eq!(metadata.code, None);
        assert_eq!(metadata.suggestion, None);
    }
}
