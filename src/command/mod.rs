mod config;
pub mod output;
pub mod project_config;

pub use config::Config;
pub use output::HangarOutput;
pub use project_config::ProjectConfigs;
