//! Integration tests for boot sequence ordering and failure propagation.
//!
//! Each test points the config at fake commands that append their step
//! name to a log file, then asserts on the recorded invocation order.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Project whose steps log their names; individual commands can be
/// overridden by writing a different config before running.
struct Project {
    temp: TempDir,
}

impl Project {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn log_path(&self) -> std::path::PathBuf {
        self.root().join("boot.log")
    }

    /// Write a liftoff.yml where every step appends to the log. Extra
    /// shell suffixes (e.g. `&& exit 7`) can be attached per step.
    fn write_config(&self, install_suffix: &str, migrate_suffix: &str, start_suffix: &str) {
        let log = self.log_path();
        let config = format!(
            r#"
runtime:
  binary: /bin/sh
  version_args: ["-c", "echo v9.9.9"]
dependencies:
  marker: node_modules
  install: "echo install >> {log}{install_suffix}"
commands:
  migrate: "echo migrate >> {log}{migrate_suffix}"
  start: "echo start >> {log}{start_suffix}"
"#,
            log = log.display(),
        );
        fs::write(self.root().join("liftoff.yml"), config).unwrap();
    }

    fn log_lines(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("liftoff"));
        cmd.current_dir(self.root());
        cmd
    }
}

#[test]
fn up_runs_install_migrate_start_in_order() {
    let project = Project::new();
    project.write_config("", "", "");

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("v9.9.9"));

    assert_eq!(project.log_lines(), vec!["install", "migrate", "start"]);
}

#[test]
fn up_skips_install_when_marker_present() {
    let project = Project::new();
    project.write_config("", "", "");
    fs::create_dir(project.root().join("node_modules")).unwrap();

    project.command().assert().success();

    assert_eq!(project.log_lines(), vec!["migrate", "start"]);
}

#[test]
fn up_missing_runtime_runs_no_steps() {
    let project = Project::new();
    project.write_config("", "", "");
    // Overwrite with a config whose runtime cannot be resolved
    fs::write(
        project.root().join("liftoff.yml"),
        "runtime:\n  binary: definitely-not-a-real-runtime-binary\n",
    )
    .unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not installed"));

    assert!(project.log_lines().is_empty());
}

#[test]
fn up_install_failure_propagates_code_and_stops() {
    let project = Project::new();
    project.write_config(" && exit 7", "", "");

    project.command().assert().failure().code(7);

    assert_eq!(project.log_lines(), vec!["install"]);
}

#[test]
fn up_migrate_failure_propagates_code_and_stops_before_launch() {
    let project = Project::new();
    project.write_config("", " && exit 3", "");

    project
        .command()
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("migrate"));

    assert_eq!(project.log_lines(), vec!["install", "migrate"]);
}

#[test]
fn up_migrate_runs_exactly_once() {
    let project = Project::new();
    project.write_config("", "", "");

    project.command().assert().success();

    let migrations = project
        .log_lines()
        .iter()
        .filter(|line| *line == "migrate")
        .count();
    assert_eq!(migrations, 1);
}

#[test]
fn up_launch_exit_is_not_forwarded_by_default() {
    let project = Project::new();
    project.write_config("", "", " && exit 5");

    // The app exiting non-zero is not the sequencer's failure
    project.command().assert().success();

    assert_eq!(project.log_lines(), vec!["install", "migrate", "start"]);
}

#[test]
fn up_forward_exit_flag_propagates_launch_status() {
    let project = Project::new();
    project.write_config("", "", " && exit 5");

    project
        .command()
        .args(["up", "--forward-exit"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn up_forward_launch_exit_config_key_propagates_launch_status() {
    let project = Project::new();
    let log = project.log_path();
    let config = format!(
        r#"
runtime:
  binary: /bin/sh
  version_args: ["-c", "echo v9.9.9"]
dependencies:
  install: "echo install >> {log}"
commands:
  migrate: "echo migrate >> {log}"
  start: "exit 9"
forward_launch_exit: true
"#,
        log = log.display(),
    );
    fs::write(project.root().join("liftoff.yml"), config).unwrap();

    project.command().assert().failure().code(9);
}

#[test]
fn up_quiet_mode_still_sequences_correctly() {
    let project = Project::new();
    project.write_config("", "", "");

    project.command().arg("--quiet").assert().success();

    assert_eq!(project.log_lines(), vec!["install", "migrate", "start"]);
}

#[test]
fn up_quiet_mode_replays_output_of_failed_step() {
    let project = Project::new();
    let log = project.log_path();
    let config = format!(
        r#"
runtime:
  binary: /bin/sh
  version_args: ["-c", "echo v9.9.9"]
dependencies:
  install: "echo install >> {log}"
commands:
  migrate: "echo migration exploded && exit 3"
  start: "echo start >> {log}"
"#,
        log = log.display(),
    );
    fs::write(project.root().join("liftoff.yml"), config).unwrap();

    project
        .command()
        .arg("--quiet")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("migration exploded"));
}
