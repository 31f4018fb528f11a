// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the code quality analyzer.
/// This includes `analyze_code` and the `AnalysisResult` struct it produces.
pub mod analyzer;

/// Module containing the individual quality checks.
/// Each check (lint, complexity, naming) contributes issues and a score deduction.
pub mod checks;

/// Module containing the shell command analyzer.
/// This includes `analyze_command` and the `CommandAnalysis` struct it produces.
pub mod command;

/// Module defining the static pattern catalogue.
/// This includes the `RiskLevel` enum and the dangerous-command, best-practice,
/// and typo tables.
pub mod patterns;

/// Module containing the Python-specific helpers.
/// This covers the Python-likeness heuristic, the embedded syntax check, and
/// the docstring corrector.
pub mod python;

/// Module containing utility functions.
/// This includes the line index used to map byte offsets to line numbers.
pub mod utils;
