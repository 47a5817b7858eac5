use crate::common::TestProject;

/// Test JSON output for a python file
#[test]
fn test_resolve_json() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Jane\"\n").unwrap();
    project.write("tool.py", "import os\n").unwrap();

    let output = project.run(&["resolve", "--format", "json", "tool.py"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);

    let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(value["languageId"], "python");
    assert_eq!(value["needsHeader"], true);
    assert_eq!(value["template"]["headerBegin"], "'''");
    assert_eq!(value["template"]["headerEnd"], "'''");
    assert_eq!(value["template"]["language"], "*");

    let variables = value["variables"].as_array().unwrap();
    assert!(variables.iter().any(|v| v[0] == "author" && v[1] == "Jane"));
    assert!(variables.iter().any(|v| v[0] == "fileBasename" && v[1] == "tool.py"));

    assert_eq!(project.read("tool.py").unwrap(), "import os\n");
}

/// Test the default TOML output
#[test]
fn test_resolve_toml() {
    let project = TestProject::new().unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    let output = project.run(&["resolve", "main.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("languageId = \"rust\""));
    assert!(output.stdout.contains("needsHeader = true"));
    assert!(output.stdout.contains("headerBegin = \"/*\""));
}
