use crate::patterns::{RiskLevel, COMMON_TYPOS, DANGER_RULES, PRACTICE_RULES};
use crate::python;
use serde::Serialize;
use std::fmt;

/// Category of a command finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandIssueKind {
    Security,
    Typo,
    Syntax,
    Error,
}

impl fmt::Display for CommandIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommandIssueKind::Security => "SECURITY",
            CommandIssueKind::Typo => "TYPO",
            CommandIssueKind::Syntax => "SYNTAX",
            CommandIssueKind::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// A single finding for a command string.
#[derive(Debug, Clone, Serialize)]
pub struct CommandIssue {
    /// Category of the finding.
    pub kind: CommandIssueKind,
    /// Risk carried by this finding alone.
    pub risk: RiskLevel,
    /// Description of the finding.
    pub message: String,
    /// The offending substring, or the whole input when nothing narrower fits.
    pub command_part: String,
}

/// Holds the results of analyzing one command string.
/// This struct is serialized to JSON if requested.
#[derive(Serialize)]
pub struct CommandAnalysis {
    /// The command as given.
    pub command: String,
    /// All issues found, in scan order.
    pub issues: Vec<CommandIssue>,
    /// All suggestions, in scan order. Duplicates are kept.
    pub suggestions: Vec<String>,
    /// Overall risk: the maximum tier among the findings.
    pub risk_level: RiskLevel,
    /// Number of issues.
    pub total_issues: usize,
    /// Number of suggestions.
    pub total_suggestions: usize,
    /// Whether the command was classified as Python code.
    pub is_code: bool,
    /// Best-effort corrected rendering when `is_code`; empty otherwise.
    pub corrected_code: String,
}

/// Tokens that usually justify `sudo`; without one of these the heuristic
/// asks the user to double-check.
const SUDO_COMPANIONS: [&str; 5] = ["apt", "yum", "dnf", "pacman", "systemctl"];

/// Analyzes a command string for security issues, best practices, and typos.
///
/// Pure function of its input: the same command always yields the same
/// analysis, and nothing is carried over between calls. The overall risk
/// level only ever escalates during the pass; a lower-tier match after a
/// higher one records its issue without downgrading the level.
pub fn analyze_command(command: &str) -> CommandAnalysis {
    let mut issues: Vec<CommandIssue> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();
    let mut risk_level = RiskLevel::Low;

    // Commands that look like Python get a syntax check first.
    // Any finding there puts the floor at Medium.
    let is_code = python::looks_like_python(command);
    if is_code {
        let python_issues = python::check_syntax(command);
        if !python_issues.is_empty() {
            risk_level = std::cmp::max(risk_level, RiskLevel::Medium);
        }
        issues.extend(python_issues);
    }

    // Dangerous patterns. The first matched substring of each rule becomes
    // the offending part.
    for rule in DANGER_RULES.iter() {
        if let Some(found) = rule.pattern.find(command) {
            issues.push(CommandIssue {
                kind: CommandIssueKind::Security,
                risk: rule.risk,
                message: rule.message.to_string(),
                command_part: found.as_str().to_string(),
            });
            risk_level = std::cmp::max(risk_level, rule.risk);
        }
    }

    // Best practices. Every match contributes; no deduplication.
    for rule in PRACTICE_RULES.iter() {
        if rule.pattern.is_match(command) {
            suggestions.push(rule.suggestion.to_string());
        }
    }

    // Heuristics, each independent of the others.
    let lowered = command.to_lowercase();
    if lowered.contains("sudo") && !SUDO_COMPANIONS.iter().any(|word| lowered.contains(word)) {
        suggestions.push("Verify if sudo is necessary for this command".to_string());
    }

    if command.contains('|') {
        suggestions.push(
            "Consider breaking complex piped commands into separate steps for clarity".to_string(),
        );
    }

    if command.split_whitespace().count() > 10 {
        suggestions.push(
            "Command is quite long - consider using a script for complex operations".to_string(),
        );
    }

    // Typos are matched by plain substring containment, so several can fire
    // on one command.
    for (typo, correction) in COMMON_TYPOS.iter() {
        if command.contains(typo) {
            issues.push(CommandIssue {
                kind: CommandIssueKind::Typo,
                risk: RiskLevel::Low,
                message: format!("Possible typo: {} should be {}", typo, correction),
                command_part: typo.to_string(),
            });
        }
    }

    let corrected_code = if is_code {
        python::insert_docstring_stubs(command)
    } else {
        String::new()
    };

    let total_issues = issues.len();
    let total_suggestions = suggestions.len();

    CommandAnalysis {
        command: command.to_string(),
        issues,
        suggestions,
        risk_level,
        total_issues,
        total_suggestions,
        is_code,
        corrected_code,
    }
}
