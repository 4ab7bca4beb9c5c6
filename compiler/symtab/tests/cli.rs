//! Runs the `symtab` executable on small scripts.

use std::{io::Write, process::Output};

use assert_cmd::Command;

fn replay_script(source: &str, arguments: &[&str]) -> Output {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();

    Command::cargo_bin("symtab")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .args(arguments)
        .output()
        .unwrap()
}

const SHADOWING: &str = r"
enter
declare a int var
enter
declare a char var
resolve a
exit
resolve a
exit
";

#[test]
fn shadowing_resolves_innermost_first() {
    let output = replay_script(SHADOWING, &[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("a -> scope #1 (depth 1): index 0, address 0"));
    assert!(stdout.contains("a -> scope #0 (depth 0): index 0, address 0"));
}

const DUPLICATE: &str = r"enter
declare f func function
declare f func function
exit
";

#[test]
fn duplicate_declaration_fails() {
    let output = replay_script(DUPLICATE, &[]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("[error]:"));
    assert!(stderr.contains("already declared"));
    assert!(stderr.contains("--> line 2"));
    assert!(stderr.contains("--> line 3"));
}

const UNBALANCED: &str = r"
exit
";

#[test]
fn exit_without_scope_fails() {
    let output = replay_script(UNBALANCED, &[]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("internal error"));
}

const OPEN: &str = r"
enter
declare counter int var
";

#[test]
fn dump_symbols_prints_open_scopes() {
    let output = replay_script(OPEN, &["--dump-symbols"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("scope #0 (depth 0)"));
    assert!(stdout.contains("counter"));
    assert!(stderr.contains("[warning]:"));
}

#[test]
fn name_limit_is_configurable() {
    let output = replay_script(OPEN, &["--max-name-length", "3"]);

    assert!(!output.status.success());
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("symtab")
        .unwrap()
        .arg("does-not-exist.sym")
        .arg("--no-color")
        .assert()
        .failure();
}

const ALIASES: &str = r"
enter
declare x int var
declare n int const
exit
";

#[test]
fn tag_limit_measures_written_aliases() {
    let output = replay_script(ALIASES, &["--max-tag-length", "5"]);

    assert!(output.status.success());
}
