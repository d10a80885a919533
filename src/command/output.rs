use std::io;

use calm_io::stdoutln;
use comfy_table::Cell;
use hangar_client::shared::ProjectConfig;
use hangar_std::{warnln, Style};

use crate::command::project_config::BulkDeleteReport;
use crate::utils::table;

/// HangarOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of hangar's commands should return `HangarResult<HangarOutput>`.
/// If the command needs to output some type of data, it should be structured
/// in this enum, and its print logic should be handled in `HangarOutput::get_stdout`
///
/// Not all commands will output machine readable information, and those should
/// return `Ok(HangarOutput::EmptySuccess)`. If a new command is added and it needs to
/// return something that is not described well in this enum, it should be added.
#[derive(Debug)]
pub enum HangarOutput {
    EmptySuccess,
    OperationCanceled,
    NoProjectConfigs,
    NothingToDelete,
    ProjectConfigDeleted,
    ProjectConfigBulkDelete(BulkDeleteReport),
    ProjectConfigList(Vec<ProjectConfig>),
    Profiles(Vec<String>),
    ProfileDetails {
        name: String,
        api_key: Option<String>,
        api_url: String,
    },
}

impl HangarOutput {
    pub fn get_stdout(&self) -> Option<String> {
        match self {
            HangarOutput::EmptySuccess => None,
            HangarOutput::OperationCanceled => Some("Operation canceled.".to_string()),
            HangarOutput::NoProjectConfigs => Some("No project configs found".to_string()),
            HangarOutput::NothingToDelete => {
                Some("There are no project configs to delete.".to_string())
            }
            HangarOutput::ProjectConfigDeleted => {
                Some("Project config deleted successfully".to_string())
            }
            // each deletion was printed while the command ran
            HangarOutput::ProjectConfigBulkDelete(_) => None,
            HangarOutput::ProjectConfigList(project_configs) => {
                if project_configs.is_empty() {
                    return Some("No project configs found".to_string());
                }
                let mut table = table::get_table();
                table.set_header(vec!["Name", "Repository", "Image", "Default"]);
                for project_config in project_configs {
                    let repository = project_config
                        .repository
                        .as_ref()
                        .map(|repository| match &repository.branch {
                            Some(branch) => format!("{} ({branch})", repository.url),
                            None => repository.url.clone(),
                        })
                        .unwrap_or_else(|| "-".to_string());
                    table.add_row(vec![
                        Cell::new(&project_config.name),
                        Cell::new(repository),
                        Cell::new(project_config.image.as_deref().unwrap_or("-")),
                        Cell::new(if project_config.default { "Yes" } else { "" }),
                    ]);
                }
                Some(table.to_string())
            }
            HangarOutput::Profiles(profiles) => {
                if profiles.is_empty() {
                    None
                } else {
                    Some(profiles.join("\n"))
                }
            }
            HangarOutput::ProfileDetails {
                name,
                api_key,
                api_url,
            } => {
                Some(format!(
                    "{}\napi_key: {}\napi_url: {api_url}",
                    Style::Heading.paint(name),
                    api_key.as_deref().unwrap_or("(none)")
                ))
            }
        }
    }

    /// Messages that go to stderr alongside the regular output.
    fn print_diagnostics(&self) {
        match self {
            HangarOutput::ProjectConfigBulkDelete(report) => {
                if report.is_partial_failure() {
                    warnln!(
                        "{} of {} project configs could not be deleted.",
                        report.failed().count(),
                        report.total()
                    );
                }
            }
            HangarOutput::Profiles(profiles) => {
                if profiles.is_empty() {
                    eprintln!("No profiles found.");
                } else {
                    eprintln!("Profiles:");
                }
            }
            _ => (),
        }
    }

    pub fn print(&self) -> io::Result<()> {
        self.print_diagnostics();
        if let Some(stdout) = self.get_stdout() {
            stdoutln!("{}", &stdout)?;
        }
        Ok(())
    }
}

/// Writes a line to stdout while a command is still running.
pub(crate) fn print_progress(line: &str) -> io::Result<()> {
    ignore_closed_pipe(stdoutln!("{}", line))
}

/// Treats a reader that went away early, like `head`, as a successful write.
/// Every other I/O error is passed through.
pub fn ignore_closed_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}
