use crate::common::TestProject;

/// Test opening never touches a file when autoHeader is off
#[test]
fn test_open_without_auto_header() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nautoHeader = false\n").unwrap();
    project.write("fresh.rs", "").unwrap();

    let output = project.run(&["open", "fresh.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert_eq!(project.read("fresh.rs").unwrap(), "");
}

/// Test opening an ignored file changes nothing
#[test]
fn test_open_ignored_file() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nignore = [\"*.lock\"]\n").unwrap();
    project.write("deps.lock", "").unwrap();

    assert!(project.run(&["open", "deps.lock"]).unwrap().success);
    assert_eq!(project.read("deps.lock").unwrap(), "");
}

/// Test a just-created file either gets a full header or is left alone
///
/// Whether the file counts as new depends on the file system recording a
/// birth time.
#[test]
fn test_open_fresh_file() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Jane\"\n").unwrap();
    project.write("fresh.rs", "").unwrap();

    let output = project.run(&["open", "fresh.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);

    let content = project.read("fresh.rs").unwrap();
    if !content.is_empty() {
        assert!(content.starts_with("/*\n *  @file: fresh.rs\n *  @author: Jane\n"));
        assert!(output.stdout.contains("fileheader inserted a file header."));
    }
}
