// Drives the compiled binary against a throwaway history file. HOME and
// XDG_CONFIG_HOME point into the temp dir so no user config is picked up.

use assert_cmd::Command;
use std::path::Path;

fn cubestat(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cubestat").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn add_solves_then_summarize() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.csv");

    let added = [
        ("10", "none"),
        ("11", "none"),
        ("12", "none"),
        ("13", "none"),
        ("14", "dnf"),
    ];
    for (time, penalty) in added {
        cubestat(dir.path())
            .args([
                "-f",
                history.to_str().unwrap(),
                "--add",
                time,
                "--penalty",
                penalty,
                "-a",
                "5",
            ])
            .assert()
            .success();
    }

    let out = stdout_of(cubestat(dir.path()).args(["-f", history.to_str().unwrap(), "-a", "5"]));
    assert!(out.contains("Solves: 5"), "{out}");
    assert!(out.contains("Best single: 10.00"), "{out}");
    assert!(out.contains("ao5: current 12.00, best 12.00"), "{out}");
}

#[test]
fn share_best_average() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.csv");
    std::fs::write(
        &history,
        "time,penalty,timestamp,scramble,comment\n\
         10.0,none,2024-03-01T10:00:00+00:00,A,\n\
         11.0,none,2024-03-01T10:01:00+00:00,B,\n\
         12.0,none,2024-03-01T10:02:00+00:00,C,\n",
    )
    .unwrap();

    let out = stdout_of(cubestat(dir.path()).args([
        "-f",
        history.to_str().unwrap(),
        "--share",
        "best",
        "-n",
        "3",
        "--no-header",
    ]));
    assert_eq!(
        out.trim_end(),
        "Best ao3: 11.00\n\nTime list:\n1. (12.00):\tC\n2. 11.00:\tB\n3. (10.00):\tA"
    );
}

#[test]
fn share_without_enough_solves() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("empty.csv");
    let out = stdout_of(cubestat(dir.path()).args([
        "-f",
        history.to_str().unwrap(),
        "--share",
        "current",
    ]));
    assert_eq!(out.trim_end(), "Not enough solves to share a current");
}

#[test]
fn period_of_one_fails() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.csv");
    cubestat(dir.path())
        .args(["-f", history.to_str().unwrap(), "-a", "1"])
        .assert()
        .failure();
}

#[test]
fn negative_time_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.csv");
    cubestat(dir.path())
        .args(["-f", history.to_str().unwrap(), "--add=-3"])
        .assert()
        .failure();
    assert!(!history.exists());
}
