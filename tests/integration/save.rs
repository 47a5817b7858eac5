use predicates::prelude::*;

use crate::common::TestProject;

const STALE_HEADER: &str = "/*
 * @file: lib.rs
 * @author: Old Author
 * @last-modified: 2000-01-01 00:00:00
 * modified by: Old Author
 */
pub fn f() {}
";

/// Test save rewrites the modification fields only
#[test]
fn test_save_updates_fields() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Jane\"\n").unwrap();
    project.write("lib.rs", STALE_HEADER).unwrap();

    let output = project.run(&["save", "lib.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);

    let content = project.read("lib.rs").unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[2], " * @author: Old Author");
    assert!(
        predicate::str::is_match(r"^ \* @last-modified: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$")
            .unwrap()
            .eval(lines[3])
    );
    assert!(!content.contains("2000-01-01"));
    assert_eq!(lines[4], " * modified by: Jane");
    assert_eq!(lines[6], "pub fn f() {}");
    assert_eq!(lines.len(), 7);
}

/// Test the configured date format is used for the timestamp
#[test]
fn test_save_uses_dateformat() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\ndateformat = \"YYYY\"\n").unwrap();
    project.write("lib.rs", STALE_HEADER).unwrap();

    assert!(project.run(&["save", "lib.rs"]).unwrap().success);
    let content = project.read("lib.rs").unwrap();
    assert!(predicate::str::is_match(r"(?m)^ \* @last-modified: \d{4}$").unwrap().eval(&content));
}

/// Test save inserts a missing header when autoHeader is on
#[test]
fn test_save_inserts_header() {
    let project = TestProject::new().unwrap();
    project.write("lib.rs", "pub fn f() {}\n").unwrap();

    let output = project.run(&["save", "lib.rs"]).unwrap();
    assert!(output.success);
    assert!(output.stdout.contains("fileheader inserted a file header."));
    assert!(project.read("lib.rs").unwrap().starts_with("/*\n *  @file: lib.rs\n"));
}

/// Test save leaves headerless files alone when autoHeader is off
#[test]
fn test_save_without_auto_header() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nautoHeader = false\n").unwrap();
    project.write("lib.rs", "pub fn f() {}\n").unwrap();

    let output = project.run(&["save", "lib.rs"]).unwrap();
    assert!(output.success);
    assert_eq!(project.read("lib.rs").unwrap(), "pub fn f() {}\n");
}

/// Test save of an ignored file with no header changes nothing
#[test]
fn test_save_ignored_file() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nignore = [\"generated/*\"]\n").unwrap();
    project.write("generated/out.rs", "pub fn g() {}\n").unwrap();

    assert!(project.run(&["save", "generated/out.rs"]).unwrap().success);
    assert_eq!(project.read("generated/out.rs").unwrap(), "pub fn g() {}\n");
}
