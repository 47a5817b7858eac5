use crate::common::TestProject;

/// Test a folder settings file overrides the workspace one
#[test]
fn test_folder_settings_override_workspace() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config]\nauthor = \"Root\"\ncompany = \"RootCo\"\n").unwrap();
    project.write("team/.fileheader.toml", "[config]\nauthor = \"Folder\"\n").unwrap();
    project.write("team/a.rs", "fn a() {}\n").unwrap();
    project.write("other/b.rs", "fn b() {}\n").unwrap();

    assert!(project.run(&["insert", "team/a.rs"]).unwrap().success);
    assert!(project.run(&["insert", "other/b.rs"]).unwrap().success);

    let a = project.read("team/a.rs").unwrap();
    assert!(a.contains("@author: Folder\n"));
    assert!(a.contains("RootCo\n"));
    assert!(a.contains("@file: a.rs\n"));

    let b = project.read("other/b.rs").unwrap();
    assert!(b.contains("@author: Root\n"));
}

/// Test the global settings layer sits below the workspace layer
#[test]
fn test_global_settings_layer() {
    let project = TestProject::new().unwrap();
    let global = project.outside_path("config.toml");
    std::fs::write(&global, "[config]\nauthor = \"Global\"\ncompany = \"GlobalCo\"\n").unwrap();
    project.write_settings("[config]\nauthor = \"Workspace\"\n").unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    assert!(project.run_with_global(&global, &["insert", "main.rs"]).unwrap().success);

    let content = project.read("main.rs").unwrap();
    assert!(content.contains("@author: Workspace\n"));
    assert!(content.contains("GlobalCo\n"));
}

/// Test the global settings path can come from the environment
#[test]
fn test_global_settings_from_env() {
    let project = TestProject::new().unwrap();
    let global = project.outside_path("env.toml");
    std::fs::write(&global, "[config]\ncompany = \"EnvCo\"\n").unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    let workspace = project.root().to_string_lossy().into_owned();
    let output = project
        .run_raw(
            &["--workspace", &workspace, "insert", "main.rs"],
            &[("FILEHEADER_CONFIG_PATH", global.as_path())],
        )
        .unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert!(project.read("main.rs").unwrap().contains("EnvCo\n"));
}

/// Test per-language templates, extension aliases and user variables
#[test]
fn test_templates_map_to_and_variables() {
    let project = TestProject::new().unwrap();
    project
        .write_settings(
            r#"
variables = [["license", "MIT"]]

[[templates]]
language = ".h"
mapTo = "cpp"

[[templates]]
language = "cpp"
headerBegin = "//=="
headerPrefix = "//"
headerEnd = "//=="
template = ["@file: {{fileBasename}}", "@license: {{license}}"]
"#,
        )
        .unwrap();
    project.write("util.h", "int util(void);\n").unwrap();

    let output = project.run(&["insert", "util.h"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);
    assert_eq!(
        project.read("util.h").unwrap(),
        "//==\n// @file: util.h\n// @license: MIT\n//==\nint util(void);\n"
    );
}

/// Test the wildcard template applies to languages without their own
#[test]
fn test_wildcard_template() {
    let project = TestProject::new().unwrap();
    project
        .write_settings(
            r#"
[[templates]]
language = "*"
template = ["@file: {{fileBasename}}", "@year: {{year}}"]
"#,
        )
        .unwrap();
    project.write("run.sh.rb", "puts 1\n").unwrap();

    assert!(project.run(&["insert", "run.sh.rb"]).unwrap().success);
    let content = project.read("run.sh.rb").unwrap();
    assert!(content.starts_with("#\n# @file: run.sh.rb\n# @year: "));
    assert_eq!(content.lines().count(), 5);
}

/// Test template filters and unknown placeholders
#[test]
fn test_filters_and_unknown_placeholders() {
    let project = TestProject::new().unwrap();
    project
        .write_settings(
            r#"
[[templates]]
language = "rust"
template = [
    '@name: {{ fileBasenameNoExtension | upper }}',
    '@id: {{ fileBasenameNoExtension | replace(from="_", to="-") }}',
    '@year: {{ createdDate | dateformat(format="YYYY") }}',
    '@missing: [{{ nothing_here }}]',
]
"#,
        )
        .unwrap();
    project.write("my_mod.rs", "").unwrap();

    let output = project.run(&["insert", "my_mod.rs"]).unwrap();
    assert!(output.success, "stderr: {}", output.stderr);

    let content = project.read("my_mod.rs").unwrap();
    assert!(content.contains(" *  @name: MY_MOD\n"));
    assert!(content.contains(" *  @id: my-mod\n"));
    assert!(content.contains(" *  @missing: []\n"));
    let year_line = content.lines().find(|l| l.contains("@year: ")).unwrap();
    assert_eq!(year_line.trim_start_matches(" *  @year: ").len(), 4);
}

/// Test invalid settings are reported with the file name
#[test]
fn test_invalid_settings_file() {
    let project = TestProject::new().unwrap();
    project.write_settings("[config\nauthor = ").unwrap();
    project.write("main.rs", "fn main() {}\n").unwrap();

    let output = project.run(&["insert", "main.rs"]).unwrap();
    assert!(!output.success);
    assert!(output.stderr.contains("Invalid settings file"));
    assert!(output.stderr.contains(".fileheader.toml"));
    assert_eq!(project.read("main.rs").unwrap(), "fn main() {}\n");
}
