mod project_config;

pub use project_config::{GitRepository, ProjectConfig};
