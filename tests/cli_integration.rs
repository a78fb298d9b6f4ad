//! Integration tests for the `dash` CLI.
//!
//! Each test points `dash` at a temp data directory, runs it as a subprocess,
//! and checks stdout and/or the persisted JSON.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SLOT_FILE: &str = "productivity-dashboard-data.json";

/// Get the path to the built `dash` binary.
fn dash_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dash"))
}

fn dash_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(dash_bin());
    cmd.arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("DASHBOARD_DIR")
        .env_remove("DASH_LOG");
    cmd
}

/// Run `dash` with the given args, returning (stdout, stderr, success).
fn run_dash(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = dash_command(dir, args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run dash");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `dash` expecting success, return stdout.
fn run_dash_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_dash(dir, args);
    if !success {
        panic!(
            "dash {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Run `dash` feeding `input` on stdin, return (stdout, stderr).
fn run_dash_with_input(dir: &Path, args: &[&str], input: &str) -> (String, String) {
    let mut child = dash_command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run dash");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn stored(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join(SLOT_FILE)).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// First run and listing
// ---------------------------------------------------------------------------

#[test]
fn first_run_lists_default_categories() {
    let tmp = TempDir::new().unwrap();
    let out = run_dash_ok(tmp.path(), &[]);
    assert!(out.starts_with("0 of 0 tasks completed"));
    for name in [
        "Client",
        "Biz System",
        "Web & Funnel",
        "AI & Tech",
        "Learning",
        "Personal",
    ] {
        assert!(out.contains(name), "missing {} in:\n{}", name, out);
    }
    assert_eq!(stored(tmp.path()).as_array().unwrap().len(), 6);
}

#[test]
fn list_single_category_json() {
    let tmp = TempDir::new().unwrap();
    let out = run_dash_ok(tmp.path(), &["list", "3", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["id"], "3");
    assert_eq!(json["name"], "Web & Funnel");
    assert_eq!(json["color"], "#45B7D1");
}

#[test]
fn list_unknown_category_fails() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_dash(tmp.path(), &["list", "42"]);
    assert!(!success);
    assert!(stderr.contains("category not found: 42"));
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[test]
fn add_toggle_and_stats() {
    let tmp = TempDir::new().unwrap();
    let task_id = run_dash_ok(tmp.path(), &["add", "1", "  Call client  "])
        .trim()
        .to_string();

    let saved = stored(tmp.path());
    assert_eq!(saved[0]["tasks"][0]["id"], task_id.as_str());
    assert_eq!(saved[0]["tasks"][0]["text"], "Call client");
    assert_eq!(saved[0]["tasks"][0]["completed"], false);
    assert!(saved[0]["tasks"][0]["createdAt"].is_i64());

    // `--json` output uses the same field names as the stored layout
    let listed: serde_json::Value =
        serde_json::from_str(&run_dash_ok(tmp.path(), &["list", "1", "--json"])).unwrap();
    assert_eq!(listed["tasks"][0]["createdAt"], saved[0]["tasks"][0]["createdAt"]);
    assert!(listed["tasks"][0].get("created_at").is_none());

    let out = run_dash_ok(tmp.path(), &["toggle", "1", &task_id]);
    assert_eq!(out.trim(), format!("{} completed", task_id));

    let stats: serde_json::Value =
        serde_json::from_str(&run_dash_ok(tmp.path(), &["stats", "--json"])).unwrap();
    assert_eq!(stats["totals"]["total"], 1);
    assert_eq!(stats["totals"]["completed"], 1);
    assert_eq!(stats["categories"][0]["stats"]["completed"], 1);

    let human = run_dash_ok(tmp.path(), &["stats"]);
    assert!(human.starts_with("1 of 1 tasks completed"));
}

#[test]
fn add_rejects_blank_text() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_dash(tmp.path(), &["add", "1", "   "]);
    assert!(!success);
    assert!(stderr.contains("task text cannot be empty"));
    assert!(!tmp.path().join(SLOT_FILE).exists());
}

#[test]
fn add_to_unknown_category_warns() {
    let tmp = TempDir::new().unwrap();
    let (stdout, stderr, success) = run_dash(tmp.path(), &["add", "99", "orphan"]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("warning: no category with id 99"));
}

#[test]
fn move_and_delete_tasks() {
    let tmp = TempDir::new().unwrap();
    let a = run_dash_ok(tmp.path(), &["add", "2", "A"]).trim().to_string();
    let b = run_dash_ok(tmp.path(), &["add", "2", "B"]).trim().to_string();

    let out = run_dash_ok(tmp.path(), &["mv", "2", &a, "up"]);
    assert_eq!(out.trim(), format!("{} is already at the top", a));

    run_dash_ok(tmp.path(), &["mv", "2", &b, "up"]);
    let saved = stored(tmp.path());
    assert_eq!(saved[1]["tasks"][0]["text"], "B");
    assert_eq!(saved[1]["tasks"][1]["text"], "A");

    let out = run_dash_ok(tmp.path(), &["rm", "2", &b]);
    assert_eq!(out.trim(), "deleted \"B\"");
    let saved = stored(tmp.path());
    assert_eq!(saved[1]["tasks"].as_array().unwrap().len(), 1);

    let (_, stderr, success) = run_dash(tmp.path(), &["toggle", "2", &b]);
    assert!(success);
    assert!(stderr.contains("warning: no task"));
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[test]
fn add_category_gets_random_hex_color() {
    let tmp = TempDir::new().unwrap();
    let out = run_dash_ok(tmp.path(), &["category", "add", "Marketing", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["name"], "Marketing");
    let color = json["color"].as_str().unwrap();
    assert_eq!(color.len(), 7);
    assert!(color.starts_with('#'));
    assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));

    let saved = stored(tmp.path());
    assert_eq!(saved.as_array().unwrap().len(), 7);
    assert_eq!(saved[6]["name"], "Marketing");
}

#[test]
fn delete_category_prompts_and_can_cancel() {
    let tmp = TempDir::new().unwrap();
    run_dash_ok(tmp.path(), &["add", "1", "keep me"]);

    let (stdout, stderr) = run_dash_with_input(tmp.path(), &["category", "rm", "1"], "n\n");
    assert!(stderr.contains("Delete category \"Client\" and its 1 tasks? [y/N]"));
    assert_eq!(stdout.trim(), "cancelled");
    assert_eq!(stored(tmp.path()).as_array().unwrap().len(), 6);

    let (stdout, _) = run_dash_with_input(tmp.path(), &["category", "rm", "1"], "y\n");
    assert_eq!(stdout.trim(), "deleted category \"Client\"");
    let saved = stored(tmp.path());
    assert_eq!(saved.as_array().unwrap().len(), 5);
    assert_eq!(saved[0]["id"], "2");

    // The deleted category is kept in the recovery log
    let log = run_dash_ok(tmp.path(), &["recovery", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&log).unwrap();
    assert_eq!(entries[0]["kind"], "delete");
    assert!(entries[0]["body"].as_str().unwrap().contains("keep me"));
}

#[test]
fn delete_category_without_prompt_when_configured() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("dashboard.toml"),
        "[ui]\nconfirm_delete = false\n",
    )
    .unwrap();
    let out = run_dash_ok(tmp.path(), &["category", "rm", "6"]);
    assert_eq!(out.trim(), "deleted category \"Personal\"");
}

#[test]
fn deleting_every_category_keeps_last_save() {
    let tmp = TempDir::new().unwrap();
    for id in ["1", "2", "3", "4", "5", "6"] {
        run_dash_ok(tmp.path(), &["category", "rm", id, "--yes"]);
    }
    // The slot still holds the last non-empty dashboard, so it comes back
    let saved = stored(tmp.path());
    assert_eq!(saved.as_array().unwrap().len(), 1);
    let out = run_dash_ok(tmp.path(), &["list"]);
    assert!(out.contains("Personal"));
}

// ---------------------------------------------------------------------------
// Storage faults
// ---------------------------------------------------------------------------

#[test]
fn corrupt_slot_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(SLOT_FILE), "{{ definitely not json").unwrap();

    let out = run_dash_ok(tmp.path(), &["list", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["categories"].as_array().unwrap().len(), 6);

    let log = run_dash_ok(tmp.path(), &["recovery"]);
    assert!(log.contains("load: unreadable data discarded"));
    assert!(log.contains("{{ definitely not json"));
}

#[test]
fn custom_storage_key() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("dashboard.toml"),
        "[storage]\nkey = \"work\"\n",
    )
    .unwrap();
    run_dash_ok(tmp.path(), &["add", "4", "Ship it"]);
    assert!(tmp.path().join("work.json").exists());
    assert!(!tmp.path().join(SLOT_FILE).exists());
}

#[test]
fn empty_recovery_log() {
    let tmp = TempDir::new().unwrap();
    let out = run_dash_ok(tmp.path(), &["recovery"]);
    assert_eq!(out.trim(), "recovery log is empty");
}
