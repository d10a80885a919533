/// all hangar-client functionality for the "project-config" commands in hangar
pub mod project_config;
