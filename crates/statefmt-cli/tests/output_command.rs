use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use statefmt_testing::TestWorld;

fn world() -> TestWorld {
    TestWorld::new().with_state(json!({"modules": [
        {"path": [], "outputs": {
            "ip": {"value": "10.0.0.1"},
            "zones": {"value": ["a", "b"]},
            "tags": {"value": {"env": "prod", "app": "web"}},
            "count": {"value": 2},
            "token": {"value": "s3cr3t", "sensitive": true}
        }},
        {"path": ["child"], "outputs": {"hidden": {"value": "x"}}}
    ]}))
}

#[test]
fn test_output_all_sorted() {
    let result = world().run(&["output"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "count = 2\nip = 10.0.0.1\ntags = {\n  app = web\n  env = prod\n}\ntoken = <sensitive>\nzones = [\n    a,\n    b\n]\n"
    );
}

#[test]
fn test_output_single_list_unnamed() {
    let result = world().run(&["output", "zones"]).unwrap();
    assert!(result.success());
    assert_eq!(result.stdout(), "a,\nb\n");
}

#[test]
fn test_output_single_scalar() {
    let result = world().run(&["output", "ip"]).unwrap();
    assert_eq!(result.stdout(), "10.0.0.1\n");
}

#[test]
fn test_output_single_map_unnamed() {
    let result = world().run(&["output", "tags"]).unwrap();
    assert_eq!(result.stdout(), "app = web\nenv = prod\n");
}

#[test]
fn test_output_sensitive_value_by_name() {
    let result = world().run(&["output", "token"]).unwrap();
    assert!(result.success());
    assert_eq!(result.stdout(), "s3cr3t\n");
}

#[test]
fn test_output_unknown_name_fails() {
    let result = world().run(&["output", "hidden"]).unwrap();
    assert!(!result.success());
    assert_eq!(result.stderr(), "Error: output \"hidden\" not found\n");
}

#[test]
fn test_output_without_outputs() {
    let result = TestWorld::new()
        .with_state(json!({"modules": [{"path": []}]}))
        .run(&["output"])
        .unwrap();
    assert!(result.success());
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("No outputs found"));
}

#[test]
#[allow(deprecated)]
fn test_missing_state_argument() {
    Command::cargo_bin("statefmt")
        .unwrap()
        .arg("output")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--state"));
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    Command::cargo_bin("statefmt")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show").and(predicate::str::contains("output")));
}
