use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PYPROJECT: &str = r#"
[project]
name = "docs"

[tool.mdformat]
wrap = 99
number = true
exclude = [".tox/**"]
"#;

fn mdconf_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mdconf"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    mdconf_cmd(dir).args(args).output().unwrap()
}

fn project_with_pyproject() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pyproject.toml"), PYPROJECT).unwrap();
    fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();
    dir
}

#[test]
fn test_pyproject_options_are_reported() {
    let dir = project_with_pyproject();

    let output = run_in(dir.path(), &["README.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("pyproject.toml"));
    assert!(stdout.contains("wrap = 99"));
    assert!(stdout.contains("number = true"));
    assert!(stdout.contains("end_of_line = lf"));
    assert!(stdout.contains("1 files resolved"));
}

#[test]
fn test_quiet_mode_output() {
    let dir = project_with_pyproject();

    let output = run_in(dir.path(), &["--quiet", "README.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let line = stdout.lines().next().unwrap();
    assert!(line.starts_with("README.md\t"));
    assert!(line.ends_with("pyproject.toml"));
    assert!(!stdout.contains("wrap"));
}

#[test]
fn test_no_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.md"), "notes\n").unwrap();

    let output = run_in(dir.path(), &["notes.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config: (defaults)"));
    assert!(stdout.contains("wrap = keep"));
    assert!(stdout.contains("extensions = (all installed)"));
}

#[test]
fn test_cli_overrides_pyproject() {
    let dir = project_with_pyproject();

    let output = run_in(dir.path(), &["--wrap", "72", "README.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("wrap = 72"));
    assert!(stdout.contains("number = true"));
}

#[test]
fn test_cli_applies_without_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.md"), "notes\n").unwrap();

    let output = run_in(dir.path(), &["--end-of-line", "crlf", "notes.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("end_of_line = crlf"));
}

#[test]
fn test_mdformat_toml_wins_and_warns() {
    let dir = project_with_pyproject();
    fs::write(dir.path().join(".mdformat.toml"), "wrap = 80\n").unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), "# Changes\n").unwrap();

    let output = run_in(dir.path(), &["README.md", "CHANGELOG.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stdout.contains(".mdformat.toml"));
    assert!(stdout.contains("wrap = 80"));
    assert!(stdout.contains("number = false"));
    assert_eq!(stderr.matches("ignoring [tool.mdformat]").count(), 1);
    assert!(stdout.contains("1 warnings"));
}

#[test]
fn test_source_native_ignores_pyproject() {
    let dir = project_with_pyproject();

    let output = run_in(dir.path(), &["--source", "native", "README.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config: (defaults)"));
}

#[test]
fn test_invalid_pyproject_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pyproject.toml"), "This is not a valid toml").unwrap();
    fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();

    let output = run_in(dir.path(), &["README.md"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("pyproject.toml"));
}

#[test]
fn test_invalid_option_value_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".mdformat.toml"), "end_of_line = \"cr\"\n").unwrap();
    fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();

    let output = run_in(dir.path(), &["README.md"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid 'end_of_line' value"));
}

#[test]
fn test_json_output() {
    let dir = project_with_pyproject();

    let output = run_in(dir.path(), &["--json", "--number", "README.md"]);
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["file"], "README.md");
    assert!(report["config"]
        .as_str()
        .unwrap()
        .ends_with("pyproject.toml"));
    assert_eq!(report["options"]["wrap"], 99);
    assert_eq!(report["options"]["number"], true);
    assert_eq!(report["options"]["exclude"], serde_json::json!([".tox/**"]));
}

#[test]
fn test_directory_walk_resolves_nested_configs() {
    let dir = project_with_pyproject();
    let pkg = dir.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join(".mdformat.toml"), "wrap = \"no\"\n").unwrap();
    fs::write(pkg.join("guide.md"), "# Guide\n").unwrap();
    fs::write(pkg.join("main.py"), "print()\n").unwrap();

    let output = run_in(dir.path(), &["--quiet", "."]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .any(|l| l.contains("guide.md") && l.ends_with(".mdformat.toml")));
    assert!(lines
        .iter()
        .any(|l| l.contains("README.md") && l.ends_with("pyproject.toml")));
}

#[test]
fn test_relative_paths_find_config_in_parent_dir() {
    let dir = project_with_pyproject();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    let guide = docs.join("guide.md");
    fs::write(&guide, "# Guide\n").unwrap();
    let expected = fs::canonicalize(dir.path().join("pyproject.toml")).unwrap();

    let absolute = guide.to_string_lossy().to_string();
    for args in [
        vec!["--quiet", "guide.md"],
        vec!["--quiet", "."],
        vec!["--quiet"],
        vec!["--quiet", absolute.as_str()],
    ] {
        let output = run_in(&docs, &args);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "args: {args:?}");
        let line = stdout.lines().next().unwrap();
        let config = line.split('\t').nth(1).unwrap();
        assert_eq!(fs::canonicalize(config).unwrap(), expected, "args: {args:?}");
    }
}

#[test]
fn test_wide_wrap_reported_as_number() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".mdformat.toml"), "wrap = 5000000000\n").unwrap();
    fs::write(dir.path().join("README.md"), "# Readme\n").unwrap();

    let output = run_in(dir.path(), &["README.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("wrap = 5000000000"));
}

#[test]
fn test_init_creates_template() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["--init"]);
    assert!(output.status.success());
    assert!(dir.path().join(".mdformat.toml").exists());

    // Second run refuses to overwrite
    let output = run_in(dir.path(), &["--init"]);
    assert!(!output.status.success());
}
