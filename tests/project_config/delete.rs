use assert_fs::TempDir;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use super::hangar;

#[test]
fn it_deletes_all_project_configs_despite_failures() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200)
            .json_body(json!([{ "name": "web" }, { "name": "api" }, { "name": "docs" }]));
    });
    let delete_web = server.mock(|when, then| {
        when.method(DELETE)
            .path("/project-config/web")
            .query_param("force", "false");
        then.status(204);
    });
    let delete_api = server.mock(|when, then| {
        when.method(DELETE).path("/project-config/api");
        then.status(500)
            .json_body(json!({ "error": "database unavailable" }));
    });
    let delete_docs = server.mock(|when, then| {
        when.method(DELETE).path("/project-config/docs");
        then.status(200);
    });

    hangar(&home, &server)
        .args(["project-config", "delete", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Deleted project config: web\nDeleted project config: docs\n",
        ))
        .stderr(predicate::str::contains(
            "failed to delete project config api: the server responded with 500 Internal Server Error: database unavailable",
        ))
        .stderr(predicate::str::contains(
            "1 of 3 project configs could not be deleted.",
        ));

    list.assert();
    delete_web.assert();
    delete_api.assert();
    delete_docs.assert();
}

#[test]
fn it_does_not_force_deletions_when_deleting_all() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([{ "name": "web" }]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/project-config/web")
            .query_param("force", "false");
        then.status(204);
    });

    hangar(&home, &server)
        .args(["pc", "rm", "-a", "-y", "-f"])
        .assert()
        .success();

    delete.assert();
}

#[test]
fn it_reports_when_there_is_nothing_to_delete() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(204);
    });

    hangar(&home, &server)
        .args(["project-config", "delete", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There are no project configs to delete.",
        ));

    delete.assert_calls(0);
}

#[test]
fn it_refuses_to_delete_all_without_a_terminal() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([{ "name": "web" }]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(204);
    });

    hangar(&home, &server)
        .args(["project-config", "delete", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E019]"))
        .stderr(predicate::str::contains("--yes"));

    list.assert_calls(0);
    delete.assert_calls(0);
}

#[test]
fn it_deletes_a_named_project_config_directly() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/project-config/web")
            .query_param("force", "true");
        then.status(204);
    });

    hangar(&home, &server)
        .args(["project-config", "remove", "web", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project config deleted successfully",
        ));

    list.assert_calls(0);
    delete.assert();
}

#[test]
fn it_fails_when_a_named_delete_fails() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/project-config/web");
        then.status(409)
            .json_body(json!({ "error": "project config is in use by 2 workspaces" }));
    });

    hangar(&home, &server)
        .args(["project-config", "delete", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error[E008]: the server responded with 409 Conflict: project config is in use by 2 workspaces",
        ))
        .stderr(predicate::str::contains("--force"));

    delete.assert();
}

#[test]
fn it_reports_an_empty_list_before_selecting() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(204);
    });

    hangar(&home, &server)
        .args(["project-config", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project configs found"));

    delete.assert_calls(0);
}

#[test]
fn it_asks_for_a_name_without_a_terminal() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/project-config");
        then.status(200).json_body(json!([{ "name": "web" }]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE);
        then.status(204);
    });

    hangar(&home, &server)
        .args(["project-config", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E019]"))
        .stderr(predicate::str::contains("NAME"));

    delete.assert_calls(0);
}

#[test]
fn it_explains_unreachable_servers() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();

    hangar(&home, &server)
        .env("HANGAR_API_URL", "http://127.0.0.1:1")
        .args(["project-config", "delete", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E001]"));
}
