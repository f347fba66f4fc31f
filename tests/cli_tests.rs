//! End-to-end tests for the `gesture-layouts` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::layout_yaml;
use tempfile::TempDir;

/// Path to the gesture-layouts binary
fn gesture_layouts_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gesture-layouts")
}

/// Runs the binary with an isolated config directory.
fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(gesture_layouts_bin())
        .env("GESTURE_LAYOUTS_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn list_json(config_dir: &Path) -> serde_json::Value {
    let output = run(config_dir, &["list", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_list_bundled_layouts() {
    let temp_dir = TempDir::new().unwrap();

    let result = list_json(temp_dir.path());

    let names: Vec<&str> = result["layouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["English (2 layers)", "French", "German", "Hindi (2 layers)", "Spanish"]
    );
    assert!(result["selected"].is_null());
    assert_eq!(result["layouts"][0]["kind"], "embedded");
    assert_eq!(result["layouts"][0]["reference"], "en");
}

#[test]
fn test_list_table_marks_nothing_selected() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["list"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("German"));
    assert!(stdout.contains("No layout selected"));
}

#[test]
fn test_select_persists_across_runs() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["select", "2"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("German"));
    assert!(temp_dir.path().join("preferences.toml").exists());

    let result = list_json(temp_dir.path());
    assert_eq!(result["selected"], 2);
    assert_eq!(result["layouts"][2]["selected"], true);
}

#[test]
fn test_select_out_of_range_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["select", "99"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No layout at position 99"));
}

#[test]
fn test_add_and_remove_custom_layout() {
    let temp_dir = TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("colemak.yaml");
    fs::write(&layout_path, layout_yaml(Some("Colemak"), 3)).unwrap();
    let uri = layout_path.to_str().unwrap();

    let output = run(temp_dir.path(), &["add", uri]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = list_json(temp_dir.path());
    assert_eq!(result["selected"], 5);
    assert_eq!(result["layouts"][5]["name"], "Colemak (3 layers)");
    assert_eq!(result["layouts"][5]["kind"], "custom");
    assert_eq!(result["layouts"][5]["reference"], uri);

    let output = run(temp_dir.path(), &["remove", uri]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No layout selected"));

    let result = list_json(temp_dir.path());
    assert_eq!(result["layouts"].as_array().unwrap().len(), 5);
    assert!(result["selected"].is_null());
}

#[test]
fn test_add_invalid_layout_fails() {
    let temp_dir = TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("empty.yaml");
    fs::write(&layout_path, layout_yaml(Some("Empty"), 0)).unwrap();

    let output = run(temp_dir.path(), &["add", layout_path.to_str().unwrap()]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no layers"));
    assert_eq!(list_json(temp_dir.path())["layouts"].as_array().unwrap().len(), 5);
}

#[test]
fn test_add_layout_named_like_bundled_fails() {
    let temp_dir = TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("my-german.yaml");
    fs::write(&layout_path, layout_yaml(Some("German"), 1)).unwrap();

    let output = run(temp_dir.path(), &["add", layout_path.to_str().unwrap()]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already named \"German\""));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("selected"));
}

#[test]
fn test_list_marks_shadowed_custom_layout() {
    let temp_dir = TempDir::new().unwrap();
    let shadowed = temp_dir.path().join("my-german.yaml");
    let other = temp_dir.path().join("other.yaml");
    fs::write(&shadowed, layout_yaml(Some("German"), 1)).unwrap();
    fs::write(&other, layout_yaml(None, 1)).unwrap();
    // Written by hand: the add command refuses shadowed layouts
    fs::write(
        temp_dir.path().join("preferences.toml"),
        format!(
            "selected_custom_keyboard_layout_history = ['{}', '{}']\n",
            shadowed.display(),
            other.display()
        ),
    )
    .unwrap();

    let result = list_json(temp_dir.path());
    let layouts = result["layouts"].as_array().unwrap();

    assert_eq!(layouts.len(), 7);
    assert_eq!(layouts[5]["name"], "German");
    assert_eq!(layouts[5]["reference"], shadowed.to_str().unwrap());
    assert_eq!(layouts[5]["shadowed"], true);
    assert_eq!(layouts[6]["name"], "other.yaml");
    assert_eq!(layouts[6]["reference"], other.to_str().unwrap());
    assert_eq!(layouts[6]["shadowed"], false);

    let output = run(temp_dir.path(), &["select", "5"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_history_limit_from_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[history]\nmax_entries = 1\n",
    )
    .unwrap();
    let first = temp_dir.path().join("first.yaml");
    let second = temp_dir.path().join("second.yaml");
    fs::write(&first, layout_yaml(None, 1)).unwrap();
    fs::write(&second, layout_yaml(None, 1)).unwrap();

    assert_eq!(run(temp_dir.path(), &["add", first.to_str().unwrap()]).status.code(), Some(0));
    let output = run(temp_dir.path(), &["add", second.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("forgot"));

    let result = list_json(temp_dir.path());
    let layouts = result["layouts"].as_array().unwrap();
    assert_eq!(layouts.len(), 6);
    assert_eq!(layouts[5]["name"], "second.yaml");
}

#[test]
fn test_validate_command() {
    let temp_dir = TempDir::new().unwrap();
    let valid = temp_dir.path().join("valid.yaml");
    let broken = temp_dir.path().join("broken.yaml");
    fs::write(&valid, layout_yaml(None, 2)).unwrap();
    fs::write(&broken, "layers: [").unwrap();

    let output = run(temp_dir.path(), &["validate", valid.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Validation passed"));
    assert!(stdout.contains("valid.yaml (2 layers)"));

    let output = run(temp_dir.path(), &["validate", broken.to_str().unwrap()]);
    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✗ Validation failed"));
}
