use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("hail")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate welcome greetings"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("hail")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hail"));
}

// ============================================================================
// Greeting Output Tests
// ============================================================================

#[test]
fn test_default_trio_is_greeted() {
    cargo_bin_cmd!("hail")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prince"))
        .stdout(predicate::str::contains("Royal_courtesan"))
        .stdout(predicate::str::contains("Emily"));
}

#[test]
fn test_explicit_names_are_greeted() {
    cargo_bin_cmd!("hail")
        .args(["Ada", "Grace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Grace"));
}

#[test]
fn test_text_output_is_sorted_by_name() {
    cargo_bin_cmd!("hail")
        .args(["Zed", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)Ada:.*Zed:").unwrap());
}

#[test]
fn test_json_output_is_parseable() {
    let output = cargo_bin_cmd!("hail")
        .args(["--json", "Ada"])
        .output()
        .expect("failed to run hail");

    assert!(output.status.success());

    let messages: std::collections::HashMap<String, String> =
        serde_json::from_slice(&output.stdout).expect("stdout must be a JSON object");
    assert_eq!(messages.len(), 1);
    assert!(messages["Ada"].contains("Ada"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn test_verbose_flag_logs_startup_to_stderr() {
    cargo_bin_cmd!("hail")
        .env_remove("RUST_LOG")
        .args(["-v", "Ada"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hail starting"))
        .stdout(predicate::str::contains("Ada"));
}

// ============================================================================
// Failure Path Tests
// ============================================================================

#[test]
fn test_empty_name_is_fatal() {
    cargo_bin_cmd!("hail")
        .args(["Ada", "", "Grace"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty name"))
        .stdout(predicate::str::is_empty());
}
