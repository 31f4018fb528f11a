use crate::analyzer::CodeIssue;
use crate::checks::CheckOutcome;
use serde::Deserialize;
use std::path::Path;

/// A single finding as reported by pylint's JSON output format.
/// Only the fields the scoring model consumes are kept.
#[derive(Deserialize)]
struct LintMessage {
    /// Message category: "error", "warning", "convention", "refactor", etc.
    #[serde(rename = "type")]
    kind: String,
    message: String,
    #[serde(default)]
    line: usize,
}

/// Deduction charged for a single lint message.
fn deduction_for(kind: &str) -> u32 {
    match kind {
        "error" => 10,
        "warning" => 5,
        _ => 2,
    }
}

/// Runs `pylint --output-format=json` over the file and folds its findings
/// into issues.
///
/// pylint exits non-zero when it finds issues; that is expected. Only a
/// failed spawn or unparsable output counts as a failure, reported as a
/// single `error` issue with no deduction so the other checks still score.
pub fn run(path: &Path) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    let output = match std::process::Command::new("pylint")
        .arg("--output-format=json")
        .arg(path)
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            outcome.issues.push(CodeIssue {
                kind: "error".to_string(),
                message: format!("Pylint failed: {}", err),
                line: 0,
            });
            return outcome;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let messages: Vec<LintMessage> = match serde_json::from_str(&stdout) {
        Ok(messages) => messages,
        Err(err) => {
            outcome.issues.push(CodeIssue {
                kind: "error".to_string(),
                message: format!("Pylint failed: {}", err),
                line: 0,
            });
            return outcome;
        }
    };

    for message in messages {
        outcome.deduction += deduction_for(&message.kind);
        outcome.issues.push(CodeIssue {
            kind: message.kind,
            message: message.message,
            line: message.line,
        });
    }

    outcome
}
