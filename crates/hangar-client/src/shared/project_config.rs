use serde::{Deserialize, Serialize};

/// A named, server-managed template used to create workspaces.
///
/// Only `name` is required; the rest is informational and only used when
/// listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub repository: Option<GitRepository>,
    #[serde(default)]
    pub default: bool,
}

impl ProjectConfig {
    /// Creates a project config that only carries a name.
    pub fn named(name: impl Into<String>) -> Self {
        ProjectConfig {
            name: name.into(),
            image: None,
            user: None,
            repository: None,
            default: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    pub url: String,
    #[serde(default)]
    pub branch: Option<String>,
}
