use clap::Parser;
use hangar_client::operations::project_config::ProjectConfigApi;

use hangar_std::{errln, Style};

use crate::command::output::print_progress;
use crate::options::{ProfileOpt, Prompter};
use crate::utils::client::ApiClientConfig;
use crate::{HangarError, HangarErrorCode, HangarErrorSuggestion, HangarOutput, HangarResult};

const CONFIRM_TITLE: &str = "Delete all project configs?";
const CONFIRM_DESCRIPTION: &str = "Are you sure you want to delete all project configs?";
const SELECT_PROMPT: &str = "Select a project config to delete";

#[derive(Debug, Parser)]
/// Delete one or all project configs
///
/// Pass a NAME to delete that project config directly. Without a NAME you
/// are asked to pick one from the list of project configs on the server.
/// Pass --all to delete every project config.
pub struct Delete {
    /// Name of the project config to delete
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Delete all project configs
    #[arg(short, long)]
    all: bool,

    /// Skip the confirmation prompt when deleting all project configs
    #[arg(short, long)]
    yes: bool,

    /// Delete project configs even if they are still in use
    #[arg(short, long)]
    force: bool,

    #[clap(flatten)]
    profile: ProfileOpt,
}

impl Delete {
    pub fn run(
        &self,
        client_config: ApiClientConfig,
        prompter: &dyn Prompter,
    ) -> HangarResult<HangarOutput> {
        let client = client_config.get_authenticated_client(&self.profile)?;
        self.execute(&client, prompter)
    }

    fn execute(
        &self,
        client: &dyn ProjectConfigApi,
        prompter: &dyn Prompter,
    ) -> HangarResult<HangarOutput> {
        if self.all {
            if let Some(name) = &self.name {
                tracing::debug!(name = %name, "--all was passed, ignoring the project config name");
            }
            return self.delete_all(client, prompter, &mut print_outcome);
        }

        let name = match &self.name {
            Some(name) => name.clone(),
            None => match self.select(client, prompter)? {
                Selection::Chosen(name) => name,
                Selection::Empty => return Ok(HangarOutput::NoProjectConfigs),
                Selection::Dismissed => return Ok(HangarOutput::EmptySuccess),
            },
        };

        tracing::info!(name = %name, force = self.force, "deleting project config");
        client.delete_project_config(&name, self.force)?;
        Ok(HangarOutput::ProjectConfigDeleted)
    }

    fn delete_all(
        &self,
        client: &dyn ProjectConfigApi,
        prompter: &dyn Prompter,
        on_outcome: &mut dyn FnMut(&DeletionOutcome) -> HangarResult<()>,
    ) -> HangarResult<HangarOutput> {
        if !self.yes {
            let confirmed = prompter
                .confirm(CONFIRM_TITLE, CONFIRM_DESCRIPTION)
                .map_err(|e| suggest_when_non_interactive(e, HangarErrorSuggestion::RerunWithYes))?;
            if !confirmed {
                return Ok(HangarOutput::OperationCanceled);
            }
        }

        let project_configs = client.list_project_configs()?;
        if project_configs.is_empty() {
            return Ok(HangarOutput::NothingToDelete);
        }

        if self.force {
            tracing::debug!("--force only applies when deleting a single project config");
        }

        let mut outcomes = Vec::with_capacity(project_configs.len());
        for project_config in project_configs {
            let name = project_config.name;
            tracing::info!(name = %name, "deleting project config");
            let result = client
                .delete_project_config(&name, false)
                .map_err(HangarError::from);
            if let Err(error) = &result {
                tracing::error!(name = %name, error = %error.message(), "failed to delete project config");
            }
            let outcome = DeletionOutcome { name, result };
            on_outcome(&outcome)?;
            outcomes.push(outcome);
        }

        Ok(HangarOutput::ProjectConfigBulkDelete(BulkDeleteReport::from(
            outcomes,
        )))
    }

    fn select(
        &self,
        client: &dyn ProjectConfigApi,
        prompter: &dyn Prompter,
    ) -> HangarResult<Selection> {
        let mut names = client
            .list_project_configs()?
            .into_iter()
            .map(|project_config| project_config.name)
            .collect::<Vec<_>>();
        if names.is_empty() {
            return Ok(Selection::Empty);
        }

        let selection = prompter
            .select(SELECT_PROMPT, &names)
            .map_err(|e| {
                suggest_when_non_interactive(e, HangarErrorSuggestion::ProvideProjectConfigName)
            })?;
        match selection {
            Some(index) if index < names.len() => {
                let name = names.swap_remove(index);
                tracing::debug!(name = %name, "selected project config");
                Ok(Selection::Chosen(name))
            }
            _ => Ok(Selection::Dismissed),
        }
    }
}

enum Selection {
    Chosen(String),
    Empty,
    Dismissed,
}

/// Reports a bulk deletion as soon as it finishes: successes on stdout,
/// failures on stderr.
fn print_outcome(outcome: &DeletionOutcome) -> HangarResult<()> {
    match &outcome.result {
        Ok(()) => print_progress(&format!("Deleted project config: {}", outcome.name))?,
        Err(error) => errln!(
            "failed to delete project config {}: {}",
            Style::ProjectConfig.paint(&outcome.name),
            error.message()
        ),
    }
    Ok(())
}

fn suggest_when_non_interactive(
    error: HangarError,
    suggestion: HangarErrorSuggestion,
) -> HangarError {
    if error.code() == Some(HangarErrorCode::E019) {
        error.with_suggestion(suggestion)
    } else {
        error
    }
}

/// The result of deleting a single project config during `--all`.
#[derive(Debug)]
pub struct DeletionOutcome {
    pub name: String,
    pub result: Result<(), HangarError>,
}

/// Per-item results of a bulk delete, in the order the server listed them.
///
/// A failed deletion does not stop the ones after it.
#[derive(Debug)]
pub struct BulkDeleteReport {
    outcomes: Vec<DeletionOutcome>,
}

impl From<Vec<DeletionOutcome>> for BulkDeleteReport {
    fn from(outcomes: Vec<DeletionOutcome>) -> Self {
        BulkDeleteReport { outcomes }
    }
}

impl BulkDeleteReport {
    /// Names of the project configs that were deleted.
    pub fn succeeded(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .map(|outcome| outcome.name.as_str())
    }

    pub fn failed(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when at least one deletion failed.
    pub fn is_partial_failure(&self) -> bool {
        self.failed().next().is_some()
    }
}
