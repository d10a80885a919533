mod delete;
mod list;

use assert_cmd::Command;
use assert_fs::TempDir;
use httpmock::MockServer;

use hangar::utils::env::HangarEnvKey;

pub(crate) const API_KEY: &str = "integration-test-key";

/// A `hangar` invocation pointed at `server` with an API key from the
/// environment and an empty config home.
pub(crate) fn hangar(home: &TempDir, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("hangar").unwrap();
    cmd.env(HangarEnvKey::ConfigHome.to_string(), home.path())
        .env(HangarEnvKey::ApiKey.to_string(), API_KEY)
        .env(HangarEnvKey::ApiUrl.to_string(), server.base_url())
        .env("NO_COLOR", "1");
    cmd
}
