use crate::command::{CommandIssue, CommandIssueKind};
use crate::patterns::RiskLevel;
use regex::Regex;
use rustpython_parser::{parse, Mode};

/// Substrings that suggest a command string is Python code rather than shell.
/// Deliberately loose: false positives only trigger an extra syntax check.
const PYTHON_INDICATORS: [&str; 18] = [
    "print(", "print ", "def ", "class ", "import ", "from ", "if ", "for ", "while ", "try:",
    "except:", "with ", ".py", "len(", "str(", "int(", "list(", "dict(",
];

/// Checks whether the given text looks like Python code.
pub fn looks_like_python(text: &str) -> bool {
    let text = text.trim();
    PYTHON_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
}

lazy_static::lazy_static! {
    /// Python 2 style print statement: `print foo`.
    static ref LEGACY_PRINT: Regex = Regex::new(r"\bprint\s+\w+").unwrap();
    /// A print call whose argument list contains a word with no quotes around it.
    static ref UNQUOTED_PRINT_ARG: Regex = Regex::new(r#"print\([^"']*\w+[^"']*\)"#).unwrap();
    /// A print call including its argument list.
    static ref PRINT_CALL: Regex = Regex::new(r"print\([^)]+\)").unwrap();
}

/// Analyzes a Python snippet for syntax errors and common style mistakes.
///
/// On a parse failure this reports exactly one syntax issue carrying the
/// parser's message; parse errors never escape this function. On success two
/// textual heuristics look for Python 2 style prints and unquoted string
/// literals in print calls.
pub fn check_syntax(source: &str) -> Vec<CommandIssue> {
    let mut issues = Vec::new();

    match parse(source, Mode::Module, "<command>") {
        Ok(_) => {
            // Valid syntax, but check for common mistakes.
            if let Some(m) = LEGACY_PRINT.find(source) {
                issues.push(CommandIssue {
                    kind: CommandIssueKind::Syntax,
                    risk: RiskLevel::Medium,
                    message: "Python 3 requires parentheses for print statements: print(\"hello\")"
                        .to_string(),
                    command_part: m.as_str().to_string(),
                });
            }

            if UNQUOTED_PRINT_ARG.is_match(source) {
                if let Some(call) = PRINT_CALL.find(source) {
                    let call = call.as_str();
                    if !call.contains('"') && !call.contains('\'') {
                        issues.push(CommandIssue {
                            kind: CommandIssueKind::Syntax,
                            risk: RiskLevel::Medium,
                            message: "String literals in print statements should be enclosed in quotes"
                                .to_string(),
                            command_part: call.to_string(),
                        });
                    }
                }
            }
        }
        Err(err) => {
            issues.push(CommandIssue {
                kind: CommandIssueKind::Syntax,
                risk: RiskLevel::Medium,
                message: format!("Syntax error: {}", err),
                command_part: source.to_string(),
            });
        }
    }

    issues
}

/// Inserts a placeholder docstring after every `def`/`class` header that has
/// none.
///
/// Detection scans the indented block under the header (blank lines are
/// skipped) for a triple-quoted string before the indentation returns to the
/// header's level. The rewrite is purely textual and does not reparse the
/// result, so decorators and multi-line signatures can produce odd output.
pub fn insert_docstring_stubs(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut corrected: Vec<String> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        corrected.push((*line).to_string());

        let stripped = line.trim();
        if !stripped.starts_with("def ") && !stripped.starts_with("class ") {
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        let mut has_docstring = false;
        for next in &lines[i + 1..] {
            let next_stripped = next.trim();
            if next_stripped.is_empty() {
                continue;
            }
            // Dedent back to the header's level ends the body.
            if next.len() - next.trim_start().len() <= indent {
                break;
            }
            if next_stripped.starts_with("\"\"\"") || next_stripped.starts_with("'''") {
                has_docstring = true;
                break;
            }
        }

        if !has_docstring {
            let pad = " ".repeat(indent + 4);
            corrected.push(format!("{}\"\"\"", pad));
            if stripped.starts_with("def ") {
                corrected.push(format!("{}Function description.", pad));
            } else {
                corrected.push(format!("{}Class description.", pad));
            }
            corrected.push(format!("{}\"\"\"", pad));
        }
    }

    corrected.join("\n")
}
