use chrono::Datelike;

use crate::common::{SYSTEM_AUTHOR, TestProject, native};

const JANE_AT_ACME: &str = "[config]\nauthor = \"Jane\"\ncompany = \"Acme\"\n";

/// Test inserting the default header into a Rust file
#[test]
fn test_insert_default_header() {
    let project = TestProject::new().unwrap();
    project.write_settings(JANE_AT_ACME).unwrap();
    project.write("src/main.rs", "fn main() {}\n").unwrap();

    let output = project.run(&["insert", "src/main.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("fileheader inserted a file header."));

    let content = project.read("src/main.rs").unwrap();
    let expected_start = format!("/*\n *  @file: {}\n *  @author: Jane\n", native("src/main.rs"));
    assert!(content.starts_with(&expected_start), "content:\n{content}");
    assert!(content.contains(" *  @description: ??\n"));
    assert!(content.contains(" *  @modified: by Jane\n"));
    let year = chrono::Local::now().year();
    assert!(content.contains(&format!(" *  @Copyright (c) {year} Acme\n")));
    assert!(content.ends_with(" */\nfn main() {}\n"));
}

/// Test that a second insert leaves the file alone
#[test]
fn test_insert_is_idempotent() {
    let project = TestProject::new().unwrap();
    project.write_settings(JANE_AT_ACME).unwrap();
    project.write("lib.rs", "pub fn f() {}\n").unwrap();

    assert!(project.run(&["insert", "lib.rs"]).unwrap().success);
    let first = project.read("lib.rs").unwrap();

    let output = project.run(&["insert", "lib.rs"]).unwrap();
    assert!(output.success);
    assert!(!output.stdout.contains("inserted"));
    assert_eq!(project.read("lib.rs").unwrap(), first);
}

/// Test the system author is used when none is configured
#[test]
fn test_insert_uses_system_author() {
    let project = TestProject::new().unwrap();
    project.write("main.go", "package main\n").unwrap();

    assert!(project.run(&["insert", "main.go"]).unwrap().success);
    let content = project.read("main.go").unwrap();
    assert!(content.contains(&format!("@author: {SYSTEM_AUTHOR}\n")));
    assert!(content.contains("Your Company"));
}

/// Test python files get triple-quote delimiters
#[test]
fn test_insert_python_delimiters() {
    let project = TestProject::new().unwrap();
    project.write_settings(JANE_AT_ACME).unwrap();
    project.write("tool.py", "import os\n").unwrap();

    assert!(project.run(&["insert", "tool.py"]).unwrap().success);
    let content = project.read("tool.py").unwrap();
    assert!(content.starts_with("'''\n @file: tool.py\n @author: Jane\n"));
    assert!(content.ends_with("'''\nimport os\n"));
}

/// Test --language overrides the extension
#[test]
fn test_insert_language_override() {
    let project = TestProject::new().unwrap();
    project.write("notes.txt", "hello\n").unwrap();

    assert!(project.run(&["insert", "--language", "ruby", "notes.txt"]).unwrap().success);
    assert!(project.read("notes.txt").unwrap().starts_with("#\n# @file: notes.txt\n"));
}

/// Test ignore patterns skip matching files
#[test]
fn test_insert_respects_ignore() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nignore = [\"*.min.js\"]\n").unwrap();
    project.write("dist/app.min.js", "var a=1;\n").unwrap();
    project.write("dist/app.js", "var a = 1;\n").unwrap();

    let output = project.run(&["insert", "dist/app.min.js"]).unwrap();
    assert!(output.success);
    assert_eq!(project.read("dist/app.min.js").unwrap(), "var a=1;\n");

    assert!(project.run(&["insert", "dist/app.js"]).unwrap().success);
    assert!(project.read("dist/app.js").unwrap().starts_with("/*\n"));
}

/// Test CRLF files stay CRLF
#[test]
fn test_insert_preserves_crlf() {
    let project = TestProject::new().unwrap();
    project.write("win.c", "int main(void) {}\r\n").unwrap();

    assert!(project.run(&["insert", "win.c"]).unwrap().success);
    let content = project.read("win.c").unwrap();
    assert!(content.starts_with("/*\r\n"));
    assert!(content.ends_with(" */\r\nint main(void) {}\r\n"));
    assert_eq!(content.matches('\n').count(), content.matches("\r\n").count());
}

/// Test --quiet suppresses the info notification
#[test]
fn test_insert_quiet() {
    let project = TestProject::new().unwrap();
    project.write("a.rs", "").unwrap();

    let output = project.run(&["--quiet", "insert", "a.rs"]).unwrap();
    assert!(output.success);
    assert!(output.stdout.is_empty());
    assert!(project.read("a.rs").unwrap().starts_with("/*\n"));
}

/// Test a missing file is reported as an error
#[test]
fn test_insert_missing_file() {
    let project = TestProject::new().unwrap();

    let output = project.run(&["insert", "nope.rs"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("error"));
    assert!(output.stderr.contains("nope.rs"));
}
