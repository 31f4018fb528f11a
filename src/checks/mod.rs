/// Check that runs an external linter over the file.
pub mod lint;

/// Check that computes cyclomatic complexity and file size metrics.
pub mod complexity;

/// Check that enforces naming conventions for functions and classes.
pub mod naming;

use crate::analyzer::CodeIssue;

/// What a single check contributes to the overall analysis.
///
/// Each check runs independently and reports its issues, its suggestions,
/// and the total score deduction it charges. The analyzer folds the
/// outcomes together; a check that fails internally reports an
/// `error`-kind issue with a deduction of zero instead of aborting.
#[derive(Default)]
pub struct CheckOutcome {
    pub issues: Vec<CodeIssue>,
    pub suggestions: Vec<String>,
    pub deduction: u32,
}
