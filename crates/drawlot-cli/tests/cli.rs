use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_runs_and_prints_output() {
    Command::cargo_bin("drawlot")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_emits_only_known_lines_within_bounds() {
    let output = Command::cargo_bin("drawlot").unwrap().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(
        (10..=20).contains(&lines.len()),
        "expected 10..=20 lines, got {}",
        lines.len()
    );
    for line in lines {
        assert!(
            matches!(line, "1" | "a" | "b" | "default"),
            "unexpected line: {:?}",
            line
        );
    }
}

#[test]
fn test_rejects_unknown_arguments() {
    Command::cargo_bin("drawlot")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .failure();
}
