use std::fs;
use std::path::Path;
use std::process::Command;

/// Create a small Java project in a temp directory for testing.
/// Returns the temp dir (must be kept alive for the duration of the test).
struct TestProject {
    dir: tempfile::TempDir,
}

impl TestProject {
    fn new() -> Self {
        TestProject {
            dir: tempfile::TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file relative to the project root.
    fn write_file(&self, rel_path: &str, content: &str) {
        let full = self.dir.path().join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }

    /// Run doclint with the given args, with cwd set to project root.
    fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_doclint"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run doclint")
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

/// One documented class with an undocumented parameter:
///
///   src/com/example/Calc.java   (line 7: parameter 'b' is undocumented)
///   src/com/example/Util.java   (clean)
fn create_basic_project() -> TestProject {
    let project = TestProject::new();
    project.write_file(
        "src/com/example/Calc.java",
        r#"package com.example;

/**
 * Integer arithmetic helpers.
 */
public class Calc {
    /**
     * Adds two numbers together.
     * @param a the first operand
     * @return the sum of both
     */
    public int add(int a, int b) {
        return a + b;
    }
}
"#,
    );
    project.write_file(
        "src/com/example/Util.java",
        r#"package com.example;

import java.util.List;

/**
 * Odds and ends, see {@link Calc#add(int, int)}.
 */
public final class Util {
    /**
     * Counts the entries of a list.
     * @param items the list to count
     * @return the number of entries
     */
    public static int count(List<String> items) {
        return items.size();
    }
}
"#,
    );
    project
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_reports_diagnostics() {
    let project = create_basic_project();
    let output = project.run(&["check"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("src/com/example/Calc.java:7: [undocumented] Parameter 'b' is undocumented"),
        "unexpected output: {}",
        stdout
    );
    assert!(stdout.contains("Checked 2 files: 1 diagnostics"));
}

#[test]
fn test_check_clean_project_exits_zero() {
    let project = TestProject::new();
    project.write_file(
        "Main.java",
        "/** The entry point of the program. */\npublic class Main {}\n",
    );

    let output = project.run(&["check"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 files: 0 diagnostics"));
}

#[test]
fn test_check_json_output() {
    let project = create_basic_project();
    let stdout = project.stdout(&["check", "--format", "json"]);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["files_checked"], 2);
    let diagnostics = value["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["kind"], "undocumented");
    assert_eq!(diagnostics[0]["line"], 7);
    assert_eq!(diagnostics[0]["declaration"], "com.example.Calc.add");
}

#[test]
fn test_check_min_length_flag() {
    let project = create_basic_project();
    let stdout = project.stdout(&["check", "--min-length", "100", "--format", "compact"]);

    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let too_short = value["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["kind"] == "comment_too_short")
        .count();
    assert_eq!(too_short, 4);
}

#[test]
fn test_check_reads_config_file() {
    let project = create_basic_project();
    project.write_file(
        ".doclint/config.toml",
        "[checker]\nminimum_comment_length = 100\n\n[[overrides]]\npaths = [\"src/com/example/Util.java\"]\nminimum_comment_length = 0\n",
    );

    let stdout = project.stdout(&["check", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let paths: Vec<&str> = value["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|d| d["kind"] == "comment_too_short")
        .map(|d| d["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["src/com/example/Calc.java"; 2]);
}

#[test]
fn test_check_missing_config_fails() {
    let project = create_basic_project();
    let output = project.run(&["check", "--config", "nope.toml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.toml"), "stderr: {}", stderr);
}

#[test]
fn test_check_no_check_references() {
    let project = TestProject::new();
    project.write_file(
        "Main.java",
        "/**\n * The entry point, see {@link Nowhere}.\n */\npublic class Main {}\n",
    );

    let output = project.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("[unresolved_type] Specified type 'Nowhere' not found"));

    let output = project.run(&["check", "--no-check-references"]);
    assert!(output.status.success());
}

#[test]
fn test_check_require_override() {
    let project = TestProject::new();
    project.write_file(
        "Money.java",
        "/** An amount of some currency. */\npublic class Money {\n    public String toString() { return \"\"; }\n}\n",
    );

    assert!(project.run(&["check"]).status.success());

    let output = project.run(&["check", "--require-override"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains(
        "Money.java:3: [missing_override] Method 'toString' overrides a supertype method but is missing @Override"
    ));
}

#[test]
fn test_check_exclude_flag() {
    let project = create_basic_project();
    let output = project.run(&["check", "--exclude", "**/Util.java"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 files: 1 diagnostics"), "stdout: {}", stdout);
    assert!(!stdout.contains("Util.java"));
}

// =============================================================================
// RESOLVE
// =============================================================================

#[test]
fn test_resolve_from_file_context() {
    let project = create_basic_project();
    let file = "src/com/example/Util.java";

    assert_eq!(project.stdout(&["resolve", "List", "--file", file]).trim(), "java.util.List");
    assert_eq!(project.stdout(&["resolve", "Calc", "--file", file]).trim(), "com.example.Calc");
    assert_eq!(project.stdout(&["resolve", "int[][]", "--file", file]).trim(), "int[][]");
}

#[test]
fn test_resolve_not_found() {
    let project = create_basic_project();
    let output = project.run(&["resolve", "Widget", "--file", "src/com/example/Util.java"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "not found");
}

#[test]
fn test_resolve_json() {
    let project = create_basic_project();
    let stdout = project.stdout(&[
        "resolve",
        "Map.Entry",
        "--file",
        "src/com/example/Util.java",
        "--format",
        "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["name"], "Map.Entry");
    // `import java.util.List` puts java.util in scope for nested names
    assert_eq!(value["binary_name"], "java.util.Map$Entry");

    let stdout = project.stdout(&[
        "resolve",
        "Widget.Part",
        "--file",
        "src/com/example/Util.java",
        "--format",
        "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(value["binary_name"].is_null());
    assert!(value["canonical_name"].is_null());

    let project_root = project.path().to_string_lossy().to_string();
    let stdout = project.stdout(&[
        "resolve",
        "java.util.Map.Entry",
        "--file",
        "src/com/example/Util.java",
        "--root",
        &project_root,
        "--format",
        "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["binary_name"], "java.util.Map$Entry");
    assert_eq!(value["canonical_name"], "java.util.Map.Entry");
}
