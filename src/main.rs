pub mod analyzer;
pub mod checks;
pub mod command;
pub mod patterns;
pub mod python;
pub mod utils;

use crate::analyzer::{analyze_code, AnalysisResult};
use crate::command::{analyze_command, CommandAnalysis};
use crate::patterns::RiskLevel;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Python file and print a quality report.
    Analyze {
        /// Path to the Python file to analyze.
        file: PathBuf,

        /// Show only the quality score.
        /// Handy for scripts that gate on a threshold.
        #[arg(long)]
        score_only: bool,

        /// Output raw JSON.
        /// If true, the output will be in JSON format for machine parsing.
        #[arg(long)]
        json: bool,
    },
    /// Analyze a command-line prompt for risk.
    Command {
        /// The command-line prompt to analyze.
        cmd: String,

        /// Output raw JSON.
        /// If true, the output will be in JSON format for machine parsing.
        #[arg(long)]
        json: bool,
    },
}

/// Main entry point of the application.
///
/// This function handles argument parsing, dispatch to the two analyzers,
/// and output formatting.
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            score_only,
            json,
        } => {
            // Caller-level validation. The engine itself tolerates missing
            // files, but the CLI refuses them up front with a clear message.
            if !file.exists() {
                println!(
                    "{}",
                    format!("Error: File '{}' not found!", file.display()).red()
                );
                std::process::exit(1);
            }
            if file.extension().map_or(true, |ext| ext != "py") {
                println!("{}", "Error: Only Python (.py) files are supported!".red());
                std::process::exit(1);
            }

            let result = analyze_code(&file);

            if json {
                // Serialize the result struct to a pretty-printed JSON string.
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if score_only {
                println!("Quality Score: {}/100", result.score);
            } else {
                display_analysis(&result);
            }
        }
        Commands::Command { cmd, json } => {
            let result = analyze_command(&cmd);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                display_command_analysis(&result);
            }
        }
    }

    Ok(())
}

/// Prints the code analysis report: header, issues, suggestions, and the
/// numbered source listing with any per-line notes.
fn display_analysis(result: &AnalysisResult) {
    let bar = "=".repeat(60);

    println!("\n{}", bar);
    println!("Code Review Analysis for: {}", result.filename);
    println!("Quality Score: {}/100", result.score);
    println!("{}\n", bar);

    if !result.issues.is_empty() {
        println!("ISSUES FOUND:");
        for issue in &result.issues {
            let text = format!(
                "  Line {}: {} - {}",
                issue.line,
                issue.kind.to_uppercase(),
                issue.message
            );
            println!("{}", tint_kind(&issue.kind, &text));
        }
        println!();
    } else {
        println!("{}", "✓ No issues found!".green());
        println!();
    }

    if !result.suggestions.is_empty() {
        println!("SUGGESTIONS:");
        for suggestion in &result.suggestions {
            println!("  • {}", suggestion);
        }
        println!();
    }

    println!("SOURCE CODE WITH LINE-BY-LINE ANALYSIS:");
    println!("{}", "-".repeat(60));

    for (i, line) in result.code_lines.iter().enumerate() {
        let line_no = i + 1;
        println!("{:3}: {}", line_no, line.trim_end());

        // Per-line notes from the reserved suggestion map.
        if let Some(notes) = result.line_suggestions.get(&line_no) {
            for note in notes {
                let text = format!("      → {}", note);
                let tag = note.split(':').next().unwrap_or("");
                let tinted = match tag {
                    "ERROR" => text.red(),
                    "WARNING" => text.yellow(),
                    "INFO" => text.blue(),
                    _ => text.normal(),
                };
                println!("{}", tinted);
            }
        }
    }

    println!("\n{}", bar);
}

/// Prints the command analysis report: header with the (truncated) command,
/// risk level, issues colored by tier, and suggestions.
fn display_command_analysis(result: &CommandAnalysis) {
    let bar = "=".repeat(60);

    let mut heading: String = result.command.chars().take(50).collect();
    if result.command.chars().count() > 50 {
        heading.push_str("...");
    }

    println!("\n{}", bar);
    println!("Command Analysis: {}", heading);
    println!("Risk Level: {}", result.risk_level);
    println!(
        "Issues: {} | Suggestions: {}",
        result.total_issues, result.total_suggestions
    );
    println!("{}\n", bar);

    if !result.issues.is_empty() {
        println!("ISSUES FOUND:");
        for issue in &result.issues {
            let text = format!("  [{}] {}: {}", issue.risk, issue.kind, issue.message);
            println!("{}", tint_risk(issue.risk, &text));
            println!(
                "{}",
                format!("      → Problematic part: {}", issue.command_part).yellow()
            );
        }
        println!();
    }

    if !result.suggestions.is_empty() {
        println!("SUGGESTIONS:");
        for suggestion in &result.suggestions {
            println!("  • {}", suggestion);
        }
        println!();
    }

    if result.is_code && !result.corrected_code.is_empty() {
        println!("SUGGESTED CORRECTIONS:");
        println!("{}", "-".repeat(60));
        println!("{}", result.corrected_code);
        println!("{}", "-".repeat(60));
        println!();
    }

    println!("{}", bar);
}

/// Colors a code-issue line by its category tag.
fn tint_kind(kind: &str, text: &str) -> ColoredString {
    match kind {
        "error" => text.red(),
        "warning" => text.yellow(),
        "info" => text.blue(),
        _ => text.normal(),
    }
}

/// Colors a command-issue line by its risk tier.
fn tint_risk(risk: RiskLevel, text: &str) -> ColoredString {
    match risk {
        RiskLevel::Critical | RiskLevel::High => text.red(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.blue(),
    }
}
