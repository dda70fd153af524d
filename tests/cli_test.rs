use party_invites::constants::{
    CLOCK_INTERFACE, ENV_ENVIRONMENT, ENV_HOST, ENV_PORT, ENV_SERVICES_ROOT, HELLO_WORLD_INTERFACE,
    IN_MEMORY_RESPONSES_CLASS, RESPONSE_REPOSITORY_INTERFACE, UPTIME_INTERFACE,
};
use serde_json::Value;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

// Runs outside the repo so neither config.toml nor logs/ are touched.
fn party_invites_in(work_dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_party_invites"))
        .args(args)
        .current_dir(work_dir)
        .env_remove(ENV_ENVIRONMENT)
        .env_remove(ENV_HOST)
        .env_remove(ENV_PORT)
        .env_remove(ENV_SERVICES_ROOT)
        .env("RUST_LOG", "party_invites=debug")
        .output()
        .unwrap()
}

fn party_invites(args: &[&str]) -> std::process::Output {
    let work_dir = tempdir().unwrap();
    party_invites_in(work_dir.path(), args)
}

#[test]
fn test_services_json_is_the_only_stdout() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let output = party_invites(&["--root", root.to_str().unwrap(), "services", "--json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let bindings: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(bindings.len(), 4);

    let binding_for = |service_type: &str| {
        bindings
            .iter()
            .find(|b| b["service_type"] == service_type)
            .cloned()
            .unwrap_or_else(|| panic!("no binding for {service_type}"))
    };
    assert_eq!(binding_for(CLOCK_INTERFACE)["lifetime"], "Transient");
    assert_eq!(binding_for(HELLO_WORLD_INTERFACE)["lifetime"], "Scoped");
    assert_eq!(binding_for(UPTIME_INTERFACE)["lifetime"], "Singleton");

    let responses = binding_for(RESPONSE_REPOSITORY_INTERFACE);
    assert_eq!(responses["lifetime"], "Singleton");
    assert_eq!(responses["implementation_type"], IN_MEMORY_RESPONSES_CLASS);

    // Registration logging still happens, on stderr.
    assert!(String::from_utf8_lossy(&output.stderr).contains("Registered service"));
}

#[test]
fn test_services_fails_on_missing_root() {
    let missing = tempdir().unwrap().path().join("missing");
    let output = party_invites(&["--root", missing.to_str().unwrap(), "services", "--json"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Service registration failed"));
}

#[test]
fn test_help_does_not_start_logging() {
    let work_dir = tempdir().unwrap();
    let output = party_invites_in(work_dir.path(), &["--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("services"));
    assert!(!work_dir.path().join("logs").exists());
}
