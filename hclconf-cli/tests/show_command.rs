//! Integration tests for the `show` command.

mod common;

use common::{TestEnv, BASE_CONFIG, OVERRIDE_CONFIG};
use predicates::prelude::*;

#[test]
fn test_show_file_as_json() {
    let env = TestEnv::new();
    let file = env.write("service.hcl", BASE_CONFIG);

    let value = env.show_json(&file, "master");

    assert_eq!(value["enable_auth"], true);
    assert_eq!(value["api"]["port"], 8080);
    assert_eq!(value["cache"]["type"], "redis");
    assert_eq!(value["rabbitmq"].as_array().unwrap().len(), 1);
    assert_eq!(value["rabbitmq"][0]["type"], "master");
    assert_eq!(value["rabbitmq"][0]["name"], "primary");
    assert_eq!(value["rabbitmq"][0]["common"]["exchange"], "events");
}

#[test]
fn test_show_selector_picks_environment() {
    let env = TestEnv::new();
    let file = env.write("service.hcl", BASE_CONFIG);

    let value = env.show_json(&file, "local");
    assert_eq!(value["rabbitmq"][0]["consumer_tag"], "orders-dev");
}

#[test]
fn test_show_selector_from_env() {
    let env = TestEnv::new();
    let file = env.write("service.hcl", BASE_CONFIG);

    env.command()
        .env("HCLCONF_SELECTOR", "local")
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("orders-dev"));
}

#[test]
fn test_show_directory_last_file_wins() {
    let env = TestEnv::new();
    let dir = env.create_dir("conf.d");
    std::fs::write(dir.join("01-base.hcl"), BASE_CONFIG).unwrap();
    std::fs::write(dir.join("02-override.hcl"), OVERRIDE_CONFIG).unwrap();

    let value = env.show_json(&dir, "master");

    assert_eq!(value["cache"]["type"], "nutsdb");
    assert_eq!(value["cache"]["nutsdb"]["path"], "/data/cache");
    assert_eq!(value["api"]["port"], 0);
    assert!(value["rabbitmq"].as_array().unwrap().is_empty());
}

#[test]
fn test_show_yaml() {
    let env = TestEnv::new();
    let file = env.write("service.hcl", BASE_CONFIG);

    env.command()
        .args(["show", "--format", "yaml"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("enable_auth: true"))
        .stdout(predicate::str::contains("consumer_tag: orders"));
}

#[test]
fn test_show_custom_extension() {
    let env = TestEnv::new();
    let dir = env.create_dir("conf.d");
    std::fs::write(dir.join("service.conf"), BASE_CONFIG).unwrap();

    env.command()
        .args(["--extension", "conf", "show"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 8080"));
}
