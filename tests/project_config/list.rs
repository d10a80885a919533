use assert_fs::TempDir;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use super::{hangar, API_KEY};

#[test]
fn it_lists_project_configs_as_a_table() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/project-config")
            .header("authorization", format!("Bearer {API_KEY}"));
        then.status(200).json_body(json!([
            {
                "name": "web",
                "image": "hangar/base:latest",
                "repository": { "url": "https://github.com/hangar-dev/web" },
                "default": true
            },
            { "name": "api" }
        ]));
    });

    hangar(&home, &server)
        .args(["project-config", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository"))
        .stdout(predicate::str::contains("https://github.com/hangar-dev/web"))
        .stdout(predicate::str::contains("api"));

    list.assert();
}

#[test]
fn it_reports_an_empty_list() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).body("null");
    });

    hangar(&home, &server)
        .args(["pc", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project configs found"));
}

#[test]
fn it_fails_when_the_key_is_rejected() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(401).json_body(json!({ "error": "invalid api key" }));
    });

    hangar(&home, &server)
        .args(["pc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error[E006]: the server responded with 401 Unauthorized: invalid api key",
        ));
}
