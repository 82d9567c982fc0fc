use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/project.json")
}

/// Config with a small percent scale so the fixture crosses the thresholds
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("scaled.toml");
    fs::write(&path, "[display]\npercent_scale = 10.0\n").unwrap();
    path
}

fn bpcomplexity(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bpcomplexity"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let assert = cmd.assert().success();
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn test_analyze_json_lists_entries_over_threshold() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let report = stdout_json(bpcomplexity(dir.path()).args([
        "analyze",
        fixture().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--format",
        "json",
    ]));

    assert_eq!(report["blueprints_scanned"], 1);
    assert_eq!(report["entries_scanned"], 3);
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["entry_display_name"], "Tick");
    assert_eq!(rows[0]["raw_score"], 12.0);
    assert_eq!(rows[0]["percent"], 120.0);
    assert_eq!(rows[0]["severity"], "ExtremelyComplex");
    assert_eq!(
        rows[0]["object_path"],
        "/Game/Characters/BP_Player.BP_Player"
    );
}

#[test]
fn test_analyze_markdown_to_file_with_threshold() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let output = dir.path().join("report.md");

    bpcomplexity(dir.path())
        .args([
            "analyze",
            fixture().to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--threshold",
            "40",
            "--format",
            "markdown",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.contains("| Entries Over Threshold | 2 |"));
    let tick = markdown.find("| Tick |").unwrap();
    let heal = markdown.find("| Heal |").unwrap();
    assert!(tick < heal);
}

#[test]
fn test_analyze_all_packages() {
    let dir = TempDir::new().unwrap();

    let report = stdout_json(bpcomplexity(dir.path()).args([
        "analyze",
        fixture().to_str().unwrap(),
        "--threshold",
        "0",
        "--all-packages",
        "--format",
        "json",
    ]));

    assert_eq!(report["blueprints_scanned"], 2);
    assert_eq!(report["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_explain_entry_breakdown() {
    let dir = TempDir::new().unwrap();

    let report = stdout_json(bpcomplexity(dir.path()).args([
        "explain",
        fixture().to_str().unwrap(),
        "BP_Player",
        "Tick",
        "--format",
        "json",
    ]));

    assert_eq!(report["graph"], "EventGraph");
    assert_eq!(report["max_depth"], 2);
    assert_eq!(report["score"]["raw_score"], 12.0);
    let titles: Vec<_> = report["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["Event Tick", "Branch", "ForEachLoop", "Apply Damage", "Play Sound 2D"]
    );
}

#[test]
fn test_explain_unknown_entry_fails() {
    let dir = TempDir::new().unwrap();

    let assert = bpcomplexity(dir.path())
        .args(["explain", fixture().to_str().unwrap(), "BP_Player", "Jump"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("No entry 'Jump'"), "stderr: {stderr}");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    let assert = bpcomplexity(dir.path())
        .args([
            "analyze",
            fixture().to_str().unwrap(),
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Configuration missing"), "stderr: {stderr}");
}

#[test]
fn test_init_creates_config_and_respects_force() {
    let dir = TempDir::new().unwrap();

    bpcomplexity(dir.path()).arg("init").assert().success();
    let written = fs::read_to_string(dir.path().join(".bpcomplexity.toml")).unwrap();
    assert!(written.contains("[weights]"));

    bpcomplexity(dir.path()).arg("init").assert().failure();
    bpcomplexity(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_discovered_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".bpcomplexity.toml"),
        "[display]\npercent_scale = 0.5\n",
    )
    .unwrap();

    bpcomplexity(dir.path())
        .args(["analyze", fixture().to_str().unwrap()])
        .assert()
        .failure();
}
