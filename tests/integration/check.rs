use crate::common::TestProject;

const HEADER: &str = "/*\n * @file: ok.rs\n * @author: Jane\n */\nfn ok() {}\n";

/// Test files with a header pass
#[test]
fn test_check_passes() {
    let project = TestProject::new().unwrap();
    project.write("ok.rs", HEADER).unwrap();

    let output = project.run(&["check", "ok.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("✓"));
    assert!(output.stdout.contains("ok.rs"));
}

/// Test a missing header fails the check
#[test]
fn test_check_reports_missing_headers() {
    let project = TestProject::new().unwrap();
    project.write("ok.rs", HEADER).unwrap();
    project.write("bad.rs", "fn bad() {}\nfn worse() {}\n").unwrap();

    let output = project.run(&["check", "ok.rs", "bad.rs"]).unwrap();
    assert!(!output.success);
    assert!(output.stdout.contains("bad.rs needs a header"));
    assert!(output.stderr.contains("1 of 2 file(s) need a header"));
    assert_eq!(project.read("bad.rs").unwrap(), "fn bad() {}\nfn worse() {}\n");
}

/// Test a single-line file always needs a header
#[test]
fn test_check_single_line_file() {
    let project = TestProject::new().unwrap();
    project.write("one.rs", "/* Copyright author */").unwrap();

    assert!(!project.run(&["check", "one.rs"]).unwrap().success);
}

/// Test an unrelated comment without sentinels does not count as a header
#[test]
fn test_check_plain_comment_is_not_a_header() {
    let project = TestProject::new().unwrap();
    project.write("plain.rs", "/*\n * just a note\n */\nfn x() {}\n").unwrap();

    assert!(!project.run(&["check", "plain.rs"]).unwrap().success);
}

/// Test ignored files pass
#[test]
fn test_check_ignored_files_pass() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nignore = [\"*.min.js\"]\n").unwrap();
    project.write("app.min.js", "a();\nb();\n").unwrap();

    let output = project.run(&["--quiet", "check", "app.min.js"]).unwrap();
    assert!(output.success);
    assert!(output.stdout.is_empty());
}
