//! End-to-end tests driving the `sand` binary.
//!
//! Each test gets its own HOME so the pointer file and tracking file never
//! touch the real user environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn sand_binary() -> String {
    env!("CARGO_BIN_EXE_sand").to_string()
}

/// Runs `sand` with an isolated HOME and no colour.
fn sand(home: &Path, args: &[&str]) -> Output {
    Command::new(sand_binary())
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("SAND_POINTER_PATH")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run sand")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Initializes a tracking file at `<home>/time.log`.
fn init(home: &Path) -> PathBuf {
    let log = home.join("time.log");
    let output = sand(home, &["init", log.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "sand init should succeed: {}",
        stderr(&output)
    );
    log
}

#[test]
fn test_init_writes_pointer_in_home() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());

    let pointer = std::fs::read_to_string(temp.path().join(".sand-config")).unwrap();
    assert_eq!(pointer, log.to_str().unwrap());
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "");
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    let output = sand(temp.path(), &["init", "other.log"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_commands_require_init() {
    let temp = TempDir::new().unwrap();

    let output = sand(temp.path(), &["status"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("sand init"));
}

#[test]
fn test_start_switch_stop_flow() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());

    let output = sand(temp.path(), &["start", "coding", "sand", "cli"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "started coding sand cli\n");

    let output = sand(temp.path(), &["status"]);
    assert!(stdout(&output).contains("coding sand cli less than a minute"));

    let output = sand(temp.path(), &["start", "reading"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("stopped coding sand cli after "));

    let output = sand(temp.path(), &["stop"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("stopped reading after "));

    let output = sand(temp.path(), &["status"]);
    assert_eq!(stdout(&output), "currently doing nothing\n");

    let contents = std::fs::read_to_string(&log).unwrap();
    let kinds: Vec<_> = contents
        .lines()
        .map(|line| line.split(' ').nth(2).unwrap())
        .collect();
    assert_eq!(kinds, ["START", "STOP", "START", "STOP"]);

    // The implicit stop shares its timestamp with the following start.
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines[1][..19], lines[2][..19]);
}

#[test]
fn test_stop_when_idle_fails_without_appending() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());

    let output = sand(temp.path(), &["stop"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Nothing is running"));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "");
}

#[test]
fn test_start_without_activity_fails() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());

    let output = sand(temp.path(), &["start"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("An activity must be given"));
    assert_eq!(std::fs::read_to_string(&log).unwrap(), "");
}

#[test]
fn test_query_reads_existing_history() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());
    std::fs::write(
        &log,
        "2020-05-03 13:55:12 START running\n\
         2020-05-04 14:55:12 STOP\n\
         2020-05-04 14:55:12 START swimming laps\n\
         2020-05-04 15:55:12 STOP\n",
    )
    .unwrap();

    let output = sand(temp.path(), &["query", "2020-05-03"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "2020-05-03 13:55:12 running  1 day, 1 hour\n"
    );

    let output = sand(temp.path(), &["query", "swimming", "--sum"]);
    assert_eq!(stdout(&output), "swimming laps 1 hour\n");
}

#[test]
fn test_malformed_log_is_reported() {
    let temp = TempDir::new().unwrap();
    let log = init(temp.path());
    std::fs::write(&log, "yesterday at noon START lunch\n").unwrap();

    let output = sand(temp.path(), &["status"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("malformed entry on line 1"));
}

#[test]
fn test_pointer_path_from_environment() {
    let temp = TempDir::new().unwrap();
    let pointer = temp.path().join("custom/pointer");
    let log = temp.path().join("time.log");

    let output = Command::new(sand_binary())
        .env("HOME", temp.path())
        .env("SAND_POINTER_PATH", &pointer)
        .env_remove("XDG_CONFIG_HOME")
        .args(["init", log.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    assert!(pointer.exists());
    assert!(!temp.path().join(".sand-config").exists());
}
