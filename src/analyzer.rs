use crate::checks::{self, CheckOutcome};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single finding reported for a source file.
#[derive(Debug, Clone, Serialize)]
pub struct CodeIssue {
    /// Category tag: "error", "warning", "info", or whatever category the
    /// external linter reports (e.g. "convention", "refactor").
    pub kind: String,
    /// Description of the finding.
    pub message: String,
    /// 1-indexed line number, or 0 when not applicable.
    pub line: usize,
}

/// Holds the results of analyzing one Python file.
/// This struct is serialized to JSON if requested.
#[derive(Serialize)]
pub struct AnalysisResult {
    /// Name of the analyzed file, without its directory.
    pub filename: String,
    /// All issues found, in check order (lint, complexity, naming).
    pub issues: Vec<CodeIssue>,
    /// Quality score in [0, 100]. Starts at 100 and only decreases.
    pub score: u8,
    /// Improvement suggestions, in check order.
    pub suggestions: Vec<String>,
    /// The source split into lines, for display. Empty when unreadable.
    pub code_lines: Vec<String>,
    /// Per-line suggestions keyed by line number.
    /// Reserved extension point; currently always empty.
    pub line_suggestions: HashMap<usize, Vec<String>>,
}

/// Analyzes a Python file and produces a deductive quality score.
///
/// Three checks run in order: an external pylint pass, complexity and size
/// metrics, and a naming-convention walk. Each check is fault tolerant: a
/// check that cannot run reports a single `error` issue, charges no
/// deduction, and the remaining checks still contribute. The score is
/// `max(0, 100 - sum of deductions)`, so this function always returns a
/// result instead of failing.
pub fn analyze_code(path: &Path) -> AnalysisResult {
    let source = fs::read_to_string(path);

    // Run the three checks. The lint pass reads the file itself through
    // pylint; the other two work on the source read above.
    let mut outcomes = vec![checks::lint::run(path)];
    match &source {
        Ok(source) => {
            outcomes.push(checks::complexity::run(source));
            outcomes.push(checks::naming::run(source));
        }
        Err(err) => {
            outcomes.push(failed_check(format!("Complexity analysis failed: {}", err)));
            outcomes.push(failed_check(format!("Naming analysis failed: {}", err)));
        }
    }

    // Fold the outcomes into one result, keeping check order.
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut deduction: u32 = 0;
    for outcome in outcomes {
        deduction += outcome.deduction;
        issues.extend(outcome.issues);
        suggestions.extend(outcome.suggestions);
    }

    let score = 100u32.saturating_sub(deduction) as u8;

    // Capture the source lines for display. Best effort: an unreadable file
    // yields an empty listing, never an error.
    let code_lines = source
        .map(|source| source.lines().map(str::to_string).collect())
        .unwrap_or_default();

    let filename = match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.display().to_string(),
    };

    AnalysisResult {
        filename,
        issues,
        score,
        suggestions,
        code_lines,
        line_suggestions: HashMap::new(),
    }
}

/// Outcome for a check that could not run at all: one `error` issue,
/// nothing charged.
fn failed_check(message: String) -> CheckOutcome {
    CheckOutcome {
        issues: vec![CodeIssue {
            kind: "error".to_string(),
            message,
            line: 0,
        }],
        suggestions: Vec::new(),
        deduction: 0,
    }
}
