use crate::analyzer::CodeIssue;
use crate::checks::CheckOutcome;
use crate::utils::LineIndex;
use rustpython_ast::{self as ast, ExceptHandler, Stmt};
use rustpython_parser::{parse, Mode};

/// Deduction charged per naming violation.
const NAMING_DEDUCTION: u32 = 2;

/// Deduction charged when the file does not parse at all.
const SYNTAX_ERROR_DEDUCTION: u32 = 20;

/// True for names written as lowercase-with-underscores, e.g. `load_config`.
/// A single lowercase word like `main` qualifies.
fn is_snake_case(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// True for names written as PascalCase, e.g. `ConfigLoader`.
fn is_pascal_case(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_ascii_uppercase()) && !name.contains('_')
}

/// Visitor that checks every function and class name in the tree.
///
/// Definitions are checked at any nesting depth: methods, nested functions,
/// and definitions inside conditional blocks are all visited.
pub struct NamingVisitor<'a> {
    /// Collected issues.
    pub issues: Vec<CodeIssue>,
    /// Collected rename suggestions, parallel to the issues.
    pub suggestions: Vec<String>,
    /// Helper for line mapping.
    line_index: &'a LineIndex,
}

impl<'a> NamingVisitor<'a> {
    /// Creates a new `NamingVisitor`.
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self {
            issues: Vec::new(),
            suggestions: Vec::new(),
            line_index,
        }
    }

    /// Visits statements, checking definitions and recursing into blocks.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                self.check_function(node.name.as_str(), node.range.start());
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFunctionDef(node) => {
                self.check_function(node.name.as_str(), node.range.start());
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::ClassDef(node) => {
                self.check_class(node.name.as_str(), node.range.start());
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::If(node) => {
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::For(node) => {
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFor(node) => {
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::While(node) => {
                for stmt in node.body.iter().chain(&node.orelse) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::With(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncWith(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Try(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for handler in &node.handlers {
                    match handler {
                        ExceptHandler::ExceptHandler(h) => {
                            for stmt in &h.body {
                                self.visit_stmt(stmt);
                            }
                        }
                    }
                }
                for stmt in node.orelse.iter().chain(&node.finalbody) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::TryStar(node) => {
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
                for handler in &node.handlers {
                    match handler {
                        ExceptHandler::ExceptHandler(h) => {
                            for stmt in &h.body {
                                self.visit_stmt(stmt);
                            }
                        }
                    }
                }
                for stmt in node.orelse.iter().chain(&node.finalbody) {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::Match(node) => {
                for case in &node.cases {
                    for stmt in &case.body {
                        self.visit_stmt(stmt);
                    }
                }
            }
            _ => {}
        }
    }

    fn check_function(&mut self, name: &str, start: ast::TextSize) {
        if !is_snake_case(name) {
            self.issues.push(CodeIssue {
                kind: "warning".to_string(),
                message: format!("Function name {} does not follow snake_case convention", name),
                line: self.line_index.line_index(start),
            });
            self.suggestions
                .push(format!("Rename {} to follow snake_case", name));
        }
    }

    fn check_class(&mut self, name: &str, start: ast::TextSize) {
        if !is_pascal_case(name) {
            self.issues.push(CodeIssue {
                kind: "warning".to_string(),
                message: format!("Class name {} does not follow PascalCase convention", name),
                line: self.line_index.line_index(start),
            });
            self.suggestions
                .push(format!("Rename {} to follow PascalCase", name));
        }
    }
}

/// Runs the naming-convention walk over the source.
///
/// A file that does not parse yields a single `error` issue carrying the
/// error's line number and a flat deduction; the walk itself is skipped.
pub fn run(source: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let line_index = LineIndex::new(source);

    match parse(source, Mode::Module, "<source>") {
        Ok(ast) => {
            if let rustpython_ast::Mod::Module(module) = &ast {
                let mut visitor = NamingVisitor::new(&line_index);
                for stmt in &module.body {
                    visitor.visit_stmt(stmt);
                }
                outcome.deduction = NAMING_DEDUCTION * visitor.issues.len() as u32;
                outcome.issues = visitor.issues;
                outcome.suggestions = visitor.suggestions;
            }
        }
        Err(err) => {
            outcome.issues.push(CodeIssue {
                kind: "error".to_string(),
                message: format!("Syntax error: {}", err),
                line: line_index.line_index(err.offset),
            });
            outcome.deduction = SYNTAX_ERROR_DEDUCTION;
        }
    }

    outcome
}
