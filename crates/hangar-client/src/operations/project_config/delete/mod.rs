mod runner;
mod types;

pub use runner::run;
pub use types::ProjectConfigDeleteInput;
