use assert_cmd::Command;
use assert_fs::TempDir;
use camino::Utf8PathBuf;
use predicates::prelude::*;

use hangar::utils::env::HangarEnvKey;
use hangar_config::{Config, Profile};

const CUSTOM_PROFILE: &str = "custom-profile";
const CUSTOM_API_KEY: &str = "custom-api-key-1234";

fn hangar(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hangar").unwrap();
    cmd.env(HangarEnvKey::ConfigHome.to_string(), home.path())
        .env_remove(HangarEnvKey::ApiKey.to_string())
        .env_remove(HangarEnvKey::ApiUrl.to_string())
        .env("NO_COLOR", "1");
    cmd
}

fn get_config(home: &TempDir) -> Config {
    let home = Utf8PathBuf::try_from(home.path().to_path_buf()).unwrap();
    Config::new(Some(home), None, None).unwrap()
}

#[test]
fn it_can_list_no_profiles() {
    let home = TempDir::new().unwrap();
    hangar(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No profiles found."));
}

#[test]
fn it_can_list_one_profile() {
    let home = TempDir::new().unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &get_config(&home), CUSTOM_API_KEY).unwrap();

    hangar(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(CUSTOM_PROFILE));
}

#[test]
fn it_masks_keys_when_showing_a_profile() {
    let home = TempDir::new().unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &get_config(&home), CUSTOM_API_KEY).unwrap();

    hangar(&home)
        .args(["config", "show", "--profile", CUSTOM_PROFILE])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key: cust***********1234"))
        .stdout(predicate::str::contains(CUSTOM_API_KEY).not());
}

#[test]
fn it_can_delete_a_profile() {
    let home = TempDir::new().unwrap();
    let config = get_config(&home);
    Profile::set_api_key(CUSTOM_PROFILE, &config, CUSTOM_API_KEY).unwrap();

    hangar(&home)
        .args(["config", "delete", CUSTOM_PROFILE])
        .assert()
        .success();

    assert!(Profile::list(&config).unwrap().is_empty());
}

#[test]
fn it_explains_missing_profiles() {
    let home = TempDir::new().unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &get_config(&home), CUSTOM_API_KEY).unwrap();

    hangar(&home)
        .args(["config", "show", "--profile", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E015]"))
        .stderr(predicate::str::contains("hangar config list"));
}

#[test]
fn it_refuses_to_delete_outside_the_profiles_dir() {
    let home = TempDir::new().unwrap();
    let config = get_config(&home);
    Profile::set_api_key("default", &config, CUSTOM_API_KEY).unwrap();
    Profile::set_api_key(CUSTOM_PROFILE, &config, CUSTOM_API_KEY).unwrap();

    hangar(&home)
        .args(["config", "delete", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E021]"));

    assert_eq!(
        Profile::list(&config).unwrap(),
        vec![CUSTOM_PROFILE.to_string(), "default".to_string()]
    );
}
