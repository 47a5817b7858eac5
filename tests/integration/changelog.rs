use crate::common::TestProject;

/// Test a change log on a headerless file adds header, caption and entry
#[test]
fn test_changelog_on_headerless_file() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Jane\"\n").unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    let output = project.run(&["changelog", "main.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("fileheader inserted a file header."));

    let content = project.read("main.rs").unwrap();
    let lines: Vec<&str> = content.lines().collect();
    let caption = lines.iter().position(|l| *l == " *  HISTORY:").unwrap();
    assert_eq!(lines[caption + 1], " *  Date                 By           Comments");
    assert_eq!(lines[caption + 2], " *  ----------           ---          ----------");
    assert!(lines[caption + 3].starts_with(" *  "));
    assert!(lines[caption + 3].ends_with("  Jane    "));
    assert_eq!(lines[caption + 4], " */");
    assert_eq!(lines[caption + 5], "fn main() {}");
}

/// Test a second change log adds exactly one entry line
#[test]
fn test_changelog_twice() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Jane\"\n").unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    assert!(project.run(&["changelog", "main.rs"]).unwrap().success);
    let first = project.read("main.rs").unwrap();

    let output = project.run(&["changelog", "main.rs"]).unwrap();
    assert!(output.success);
    assert!(!output.stdout.contains("inserted"));

    let second = project.read("main.rs").unwrap();
    assert_eq!(second.lines().count(), first.lines().count() + 1);
    assert_eq!(second.matches("HISTORY:").count(), 1);
    assert_eq!(second.matches("  Jane    \n").count(), 2);
}

/// Test a header without an end marker gets no change log
#[test]
fn test_changelog_without_end_marker() {
    let project = TestProject::new().unwrap();
    let original = "/*\n * @file: broken.c\nint x;\n";
    project.write("broken.c", original).unwrap();

    let output = project.run(&["changelog", "broken.c"]).unwrap();
    assert!(output.success);
    assert_eq!(project.read("broken.c").unwrap(), original);
}
