use serde::Serialize;

use super::OutputFormat;
use crate::linting::LintResult;
use crate::resolver::TypeRef;

/// Format any serializable value as JSON.
pub fn format_json<T: Serialize>(value: &T, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Compact => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Json | OutputFormat::Text => {
            serde_json::to_string_pretty(value).unwrap_or_default()
        }
    }
}

/// Format the diagnostics of a lint run.
pub fn format_lint_result(result: &LintResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json | OutputFormat::Compact => format_json(result, format),
        OutputFormat::Text => {
            let mut output = String::new();
            for d in &result.diagnostics {
                output.push_str(&format!(
                    "{}:{}: [{}] {}\n",
                    d.path.display(),
                    d.line,
                    d.kind,
                    d.message
                ));
            }
            output.push_str(&format!(
                "Checked {} files: {} diagnostics ({}ms)",
                result.files_checked,
                result.diagnostics.len(),
                result.duration_ms,
            ));
            output
        }
    }
}

#[derive(Serialize)]
struct Resolution<'a> {
    name: &'a str,
    binary_name: Option<&'a str>,
    canonical_name: Option<String>,
}

/// Format the outcome of resolving `name`.
pub fn format_resolution(name: &str, resolved: Option<&TypeRef>, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Json | OutputFormat::Compact => {
            let resolution = Resolution {
                name,
                binary_name: resolved.map(|t| t.name()),
                canonical_name: resolved.map(|t| t.canonical_name()),
            };
            format_json(&resolution, format)
        }
        OutputFormat::Text => match resolved {
            Some(t) => format!("{}{}", t.name(), "[]".repeat(t.dims())),
            None => "not found".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linting::FileDiagnostic;
    use crate::model::DiagnosticKind;
    use std::path::PathBuf;

    fn result() -> LintResult {
        LintResult {
            files_checked: 2,
            diagnostics: vec![FileDiagnostic {
                path: PathBuf::from("src/App.java"),
                line: 7,
                kind: DiagnosticKind::Undocumented,
                message: "Parameter 'b' is undocumented".to_string(),
                declaration: "com.example.App.add".to_string(),
            }],
            parse_errors: Vec::new(),
            duration_ms: 3,
        }
    }

    #[test]
    fn test_text_lint_output() {
        let text = format_lint_result(&result(), &OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "src/App.java:7: [undocumented] Parameter 'b' is undocumented"
        );
        assert_eq!(lines[1], "Checked 2 files: 1 diagnostics (3ms)");
    }

    #[test]
    fn test_json_lint_output() {
        let json = format_lint_result(&result(), &OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["files_checked"], 2);
        assert_eq!(value["diagnostics"][0]["kind"], "undocumented");
        assert_eq!(value["diagnostics"][0]["line"], 7);

        let compact = format_lint_result(&result(), &OutputFormat::Compact);
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_resolution_output() {
        let entry = TypeRef::new("java.util.Map$Entry");
        assert_eq!(
            format_resolution("Map.Entry", Some(&entry), &OutputFormat::Text),
            "java.util.Map$Entry"
        );
        let matrix = TypeRef::new("int").with_dims(2);
        assert_eq!(
            format_resolution("int[][]", Some(&matrix), &OutputFormat::Text),
            "int[][]"
        );
        assert_eq!(
            format_resolution("Nope", None, &OutputFormat::Text),
            "not found"
        );

        let json = format_resolution("Map.Entry", Some(&entry), &OutputFormat::Compact);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["binary_name"], "java.util.Map$Entry");
        assert_eq!(value["canonical_name"], "java.util.Map.Entry");
    }
}
