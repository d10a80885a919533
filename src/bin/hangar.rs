use clap::Parser;
use hangar::cli::Hangar;
use hangar::command::output::ignore_closed_pipe;

use std::process;

fn main() {
    let app = Hangar::parse();
    timber::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    match app.run() {
        Ok(output) => {
            if let Err(error) = ignore_closed_pipe(output.print()) {
                tracing::error!(%error, "could not print command output");
                process::exit(1)
            }
            process::exit(0)
        }
        Err(error) => {
            tracing::debug!(?error);
            if let Err(print_error) = ignore_closed_pipe(error.print()) {
                tracing::error!(error = %print_error, "could not print error");
            }
            process::exit(1)
        }
    }
}
