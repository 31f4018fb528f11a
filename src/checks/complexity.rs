use crate::analyzer::CodeIssue;
use crate::checks::CheckOutcome;
use crate::utils::LineIndex;
use rustpython_ast::{self as ast, Comprehension, ExceptHandler, Expr, Stmt};
use rustpython_parser::{parse, Mode};

/// Functions above this cyclomatic complexity are reported.
const COMPLEXITY_THRESHOLD: u32 = 10;

/// Files longer than this many lines are reported.
const FILE_LENGTH_THRESHOLD: usize = 100;

/// Cyclomatic complexity of a single function or method.
pub struct FunctionComplexity {
    pub name: String,
    pub complexity: u32,
    pub line: usize,
}

/// Visitor that computes cyclomatic complexity for every function definition.
///
/// Each function starts at 1 and gains a point per decision point in its own
/// body. Nested definitions are reported as separate entries and do not count
/// toward the enclosing function.
pub struct ComplexityVisitor<'a> {
    /// Collected per-function results, in source order.
    pub functions: Vec<FunctionComplexity>,
    /// Helper for line mapping.
    line_index: &'a LineIndex,
}

impl<'a> ComplexityVisitor<'a> {
    /// Creates a new `ComplexityVisitor`.
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self {
            functions: Vec::new(),
            line_index,
        }
    }

    /// Visits statements to find function definitions at any nesting depth.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(node) => {
                self.record(node.name.as_str(), &node.body, node.range.start());
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::AsyncFunctionDef(node) => {
                self.record(node.name.as_str(), &node.body, node.range.start());
                for stmt in &node.body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::ClassDef(node) => {
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

    /// Records one function with its computed complexity.
    fn record(&mut self, name: &str, body: &[Stmt], start: ast::TextSize) {
        self.functions.push(FunctionComplexity {
            name: name.to_string(),
            complexity: 1 + body_complexity(body),
            line: self.line_index.line_index(start),
        });
    }
}

/// Sums the decision points of a statement sequence.
fn body_complexity(body: &[Stmt]) -> u32 {
    body.iter().map(stmt_complexity).sum()
}

/// Decision points contributed by one statement, recursively.
fn stmt_complexity(stmt: &Stmt) -> u32 {
    match stmt {
        // Nested definitions are measured as their own blocks.
        Stmt::FunctionDef(_) | Stmt::AsyncFunctionDef(_) | Stmt::ClassDef(_) => 0,
        Stmt::If(node) => {
            1 + expr_complexity(&node.test)
                + body_complexity(&node.body)
                + body_complexity(&node.orelse)
        }
        Stmt::For(node) => {
            1 + expr_complexity(&node.iter)
                + body_complexity(&node.body)
                + body_complexity(&node.orelse)
        }
        Stmt::AsyncFor(node) => {
            1 + expr_complexity(&node.iter)
                + body_complexity(&node.body)
                + body_complexity(&node.orelse)
        }
        Stmt::While(node) => {
            1 + expr_complexity(&node.test)
                + body_complexity(&node.body)
                + body_complexity(&node.orelse)
        }
        Stmt::With(node) => {
            let items: u32 = node
                .items
                .iter()
                .map(|item| expr_complexity(&item.context_expr))
                .sum();
            1 + items + body_complexity(&node.body)
        }
        Stmt::AsyncWith(node) => {
            let items: u32 = node
                .items
                .iter()
                .map(|item| expr_complexity(&item.context_expr))
                .sum();
            1 + items + body_complexity(&node.body)
        }
        Stmt::Try(node) => {
            let mut count = node.handlers.len() as u32 + body_complexity(&node.body);
            for handler in &node.handlers {
                match handler {
                    ExceptHandler::ExceptHandler(h) => {
                        count += body_complexity(&h.body);
                    }
                }
            }
            count + body_complexity(&node.orelse) + body_complexity(&node.finalbody)
        }
        Stmt::TryStar(node) => {
            let mut count = node.handlers.len() as u32 + body_complexity(&node.body);
            for handler in &node.handlers {
                match handler {
                    ExceptHandler::ExceptHandler(h) => {
                        count += body_complexity(&h.body);
                    }
                }
            }
            count + body_complexity(&node.orelse) + body_complexity(&node.finalbody)
        }
        Stmt::Match(node) => {
            let mut count = node.cases.len() as u32 + expr_complexity(&node.subject);
            for case in &node.cases {
                if let Some(guard) = &case.guard {
                    count += expr_complexity(guard);
                }
                count += body_complexity(&case.body);
            }
            count
        }
        Stmt::Assert(node) => 1 + expr_complexity(&node.test),
        Stmt::Return(node) => node.value.as_deref().map_or(0, expr_complexity),
        Stmt::Expr(node) => expr_complexity(&node.value),
        Stmt::Assign(node) => expr_complexity(&node.value),
        Stmt::AugAssign(node) => expr_complexity(&node.value),
        Stmt::AnnAssign(node) => node.value.as_deref().map_or(0, expr_complexity),
        Stmt::Raise(node) => node.exc.as_deref().map_or(0, expr_complexity),
        _ => 0,
    }
}

/// Decision points contributed by one expression, recursively.
///
/// Boolean chains count one per operator, conditionals count one, and every
/// comprehension generator counts one plus one per filter clause.
fn expr_complexity(expr: &Expr) -> u32 {
    match expr {
        Expr::BoolOp(node) => {
            node.values.len().saturating_sub(1) as u32
                + node.values.iter().map(expr_complexity).sum::<u32>()
        }
        Expr::IfExp(node) => {
            1 + expr_complexity(&node.test)
                + expr_complexity(&node.body)
                + expr_complexity(&node.orelse)
        }
        Expr::ListComp(node) => {
            generators_complexity(&node.generators) + expr_complexity(&node.elt)
        }
        Expr::SetComp(node) => generators_complexity(&node.generators) + expr_complexity(&node.elt),
        Expr::GeneratorExp(node) => {
            generators_complexity(&node.generators) + expr_complexity(&node.elt)
        }
        Expr::DictComp(node) => {
            generators_complexity(&node.generators)
                + expr_complexity(&node.key)
                + expr_complexity(&node.value)
        }
        Expr::BinOp(node) => expr_complexity(&node.left) + expr_complexity(&node.right),
        Expr::UnaryOp(node) => expr_complexity(&node.operand),
        Expr::Compare(node) => {
            expr_complexity(&node.left) + node.comparators.iter().map(expr_complexity).sum::<u32>()
        }
        Expr::Call(node) => {
            expr_complexity(&node.func)
                + node.args.iter().map(expr_complexity).sum::<u32>()
                + node
                    .keywords
                    .iter()
                    .map(|kw| expr_complexity(&kw.value))
                    .sum::<u32>()
        }
        Expr::Attribute(node) => expr_complexity(&node.value),
        Expr::Subscript(node) => expr_complexity(&node.value) + expr_complexity(&node.slice),
        Expr::Lambda(node) => expr_complexity(&node.body),
        Expr::Await(node) => expr_complexity(&node.value),
        Expr::Starred(node) => expr_complexity(&node.value),
        Expr::NamedExpr(node) => expr_complexity(&node.value),
        Expr::Tuple(node) => node.elts.iter().map(expr_complexity).sum(),
        Expr::List(node) => node.elts.iter().map(expr_complexity).sum(),
        Expr::Set(node) => node.elts.iter().map(expr_complexity).sum(),
        Expr::Dict(node) => {
            node.keys.iter().flatten().map(expr_complexity).sum::<u32>()
                + node.values.iter().map(expr_complexity).sum::<u32>()
        }
        _ => 0,
    }
}

/// Decision points of a comprehension's generator clauses.
fn generators_complexity(generators: &[Comprehension]) -> u32 {
    generators
        .iter()
        .map(|gen| {
            1 + gen.ifs.len() as u32
                + expr_complexity(&gen.iter)
                + gen.ifs.iter().map(expr_complexity).sum::<u32>()
        })
        .sum()
}

/// Runs the complexity and file-size metrics over the source.
///
/// A parse failure is reported as a single `error` issue with no deduction;
/// the file-length metric is skipped in that case.
pub fn run(source: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    match parse(source, Mode::Module, "<source>") {
        Ok(ast) => {
            if let rustpython_ast::Mod::Module(module) = &ast {
                let line_index = LineIndex::new(source);
                let mut visitor = ComplexityVisitor::new(&line_index);
                for stmt in &module.body {
                    visitor.visit_stmt(stmt);
                }

                for func in &visitor.functions {
                    if func.complexity > COMPLEXITY_THRESHOLD {
                        outcome.issues.push(CodeIssue {
                            kind: "warning".to_string(),
                            message: format!(
                                "High complexity in {}: {}",
                                func.name, func.complexity
                            ),
                            line: func.line,
                        });
                        outcome.deduction += 5;
                        outcome
                            .suggestions
                            .push(format!("Refactor {} to reduce complexity", func.name));
                    }
                }
            }

            let loc = source.lines().count();
            if loc > FILE_LENGTH_THRESHOLD {
                outcome.issues.push(CodeIssue {
                    kind: "info".to_string(),
                    message: format!("File is quite long: {} lines", loc),
                    line: 0,
                });
                outcome.deduction += 5;
                outcome
                    .suggestions
                    .push("Consider breaking down the file into smaller modules".to_string());
            }
        }
        Err(err) => {
            outcome.issues.push(CodeIssue {
                kind: "error".to_string(),
                message: format!("Complexity analysis failed: {}", err),
                line: 0,
            });
        }
    }

    outcome
}
