use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Risk level assigned to a command finding.
///
/// Variants are declared in ascending order so that the overall risk of a
/// command can be computed with `max` over the matched rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        write!(f, "{}", label)
    }
}

/// A dangerous-command rule: a pattern, the risk it carries, and the message
/// reported when it matches.
pub struct DangerRule {
    pub pattern: Regex,
    pub risk: RiskLevel,
    pub message: &'static str,
}

/// A best-practice rule: a pattern and the suggestion emitted when it matches.
pub struct PracticeRule {
    pub pattern: Regex,
    pub suggestion: &'static str,
}

lazy_static::lazy_static! {
    /// Known dangerous command patterns.
    /// All patterns match case-insensitively; the first match in the command
    /// is reported as the offending part.
    pub static ref DANGER_RULES: Vec<DangerRule> = vec![
        DangerRule {
            pattern: Regex::new(r"(?i)rm\s+-rf\s+/").unwrap(),
            risk: RiskLevel::Critical,
            message: "Using rm -rf on root directory can delete entire system",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)rm\s+-rf\s+\*").unwrap(),
            risk: RiskLevel::Critical,
            message: "Using rm -rf * can delete all files in current directory",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)rm\s+-rf\s+/home").unwrap(),
            risk: RiskLevel::High,
            message: "Deleting /home directory affects all user data",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)chmod\s+777\s+").unwrap(),
            risk: RiskLevel::Medium,
            message: "Setting permissions to 777 gives full access to everyone",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)sudo\s+.*rm\s+-rf").unwrap(),
            risk: RiskLevel::Critical,
            message: "Combining sudo with rm -rf is extremely dangerous",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)>\s*/dev/sd[a-z]").unwrap(),
            risk: RiskLevel::Critical,
            message: "Writing to disk device can destroy partition",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)dd\s+if=.*of=/dev/sd[a-z]").unwrap(),
            risk: RiskLevel::Critical,
            message: "dd command can overwrite entire disks",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)curl\s+.*\|\s*bash").unwrap(),
            risk: RiskLevel::High,
            message: "Piping curl output to bash can execute malicious code",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)wget\s+.*\|\s*bash").unwrap(),
            risk: RiskLevel::High,
            message: "Piping wget output to bash can execute malicious code",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)ssh\s+.*-o\s+StrictHostKeyChecking=no").unwrap(),
            risk: RiskLevel::Medium,
            message: "Disabling host key checking is insecure",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)mysql\s+.*-p\s*[^-]").unwrap(),
            risk: RiskLevel::Medium,
            message: "Password in command line is visible in process list",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)psql\s+.*-W").unwrap(),
            risk: RiskLevel::Medium,
            message: "Password prompt might be insecure",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)find\s+.*-exec\s+rm").unwrap(),
            risk: RiskLevel::Medium,
            message: "find with -exec rm can be dangerous if not careful",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)chown\s+.*:\s*").unwrap(),
            risk: RiskLevel::Low,
            message: "Changing ownership - verify target is correct",
        },
        DangerRule {
            pattern: Regex::new(r"(?i)mount\s+.*remount").unwrap(),
            risk: RiskLevel::Medium,
            message: "Remounting can affect system stability",
        },
    ];

    /// Best-practice patterns. Every match adds its suggestion; matches carry
    /// no risk on their own.
    pub static ref PRACTICE_RULES: Vec<PracticeRule> = vec![
        PracticeRule {
            pattern: Regex::new(r"(?i)cp\s+.*\s+.*").unwrap(),
            suggestion: "Consider using rsync for large file operations",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)tar\s+.*").unwrap(),
            suggestion: "Consider using pigz for faster compression",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)grep\s+.*").unwrap(),
            suggestion: "Consider using ripgrep (rg) for faster searching",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)find\s+.*").unwrap(),
            suggestion: "Consider using fd for faster file finding",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)ls\s+-la").unwrap(),
            suggestion: "Consider using exa or lsd for better output",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)cat\s+.*\|\s*grep").unwrap(),
            suggestion: "Consider using grep directly on files",
        },
        PracticeRule {
            pattern: Regex::new(r"(?i)ps\s+aux").unwrap(),
            suggestion: "Consider using htop or btop for better process monitoring",
        },
    ];
}

/// Common command-line typos and their corrections.
/// Matched by case-sensitive substring containment, not regex.
pub const COMMON_TYPOS: [(&str, &str); 6] = [
    ("gerp", "grep"),
    ("cd..", "cd .."),
    ("cd/", "cd /"),
    ("ls-la", "ls -la"),
    ("ps-aux", "ps aux"),
    ("top|", "top |"),
];
