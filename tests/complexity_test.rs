// Unit tests for the cyclomatic complexity check
// Exercises the visitor counting rules and the check-level reporting

use revet_rs::checks::complexity::{self, ComplexityVisitor};
use revet_rs::utils::LineIndex;
use rustpython_parser::{parse, Mode};

/// Parses the source and returns the computed per-function complexities.
fn measure(source: &str) -> Vec<(String, u32)> {
    let tree = parse(source, Mode::Module, "test.py").expect("Failed to parse");
    let line_index = LineIndex::new(source);
    let mut visitor = ComplexityVisitor::new(&line_index);

    if let rustpython_ast::Mod::Module(module) = tree {
        for stmt in &module.body {
            visitor.visit_stmt(stmt);
        }
    }

    visitor
        .functions
        .into_iter()
        .map(|f| (f.name, f.complexity))
        .collect()
}

#[test]
fn test_straight_line_function_is_one() {
    let source = r#"
def simple():
    return 1
"#;
    let functions = measure(source);
    assert_eq!(functions, vec![("simple".to_string(), 1)]);
}

#[test]
fn test_branching_and_loops() {
    let source = r#"
def branchy(x):
    if x > 0 and x < 100:
        return 1
    elif x == 0:
        return 2
    else:
        for i in range(3):
            while i > 0:
                i -= 1
    return 0
"#;
    // 1 base + if + boolean chain + elif + for + while.
    let functions = measure(source);
    assert_eq!(functions, vec![("branchy".to_string(), 6)]);
}

#[test]
fn test_except_handlers_count() {
    let source = r#"
def guarded():
    try:
        risky()
    except ValueError:
        pass
    except KeyError:
        pass
"#;
    let functions = measure(source);
    assert_eq!(functions, vec![("guarded".to_string(), 3)]);
}

#[test]
fn test_comprehension_with_filter() {
    let source = r#"
def positives(xs):
    return [x for x in xs if x > 0]
"#;
    // 1 base + generator + filter clause.
    let functions = measure(source);
    assert_eq!(functions, vec![("positives".to_string(), 3)]);
}

#[test]
fn test_nested_functions_are_separate_blocks() {
    let source = r#"
def outer():
    def inner(x):
        if x:
            return 1
        return 0
    return inner
"#;
    let functions = measure(source);
    assert_eq!(
        functions,
        vec![("outer".to_string(), 1), ("inner".to_string(), 2)]
    );
}

#[test]
fn test_methods_are_measured() {
    let source = r#"
class Machine:
    def step(self, state):
        if state:
            return state - 1
        return 0
"#;
    let functions = measure(source);
    assert_eq!(functions, vec![("step".to_string(), 2)]);
}

#[test]
fn test_function_line_numbers() {
    let source = "def first():\n    pass\n\ndef second():\n    pass\n";
    let tree = parse(source, Mode::Module, "test.py").expect("Failed to parse");
    let line_index = LineIndex::new(source);
    let mut visitor = ComplexityVisitor::new(&line_index);

    if let rustpython_ast::Mod::Module(module) = tree {
        for stmt in &module.body {
            visitor.visit_stmt(stmt);
        }
    }

    assert_eq!(visitor.functions[0].line, 1);
    assert_eq!(visitor.functions[1].line, 4);
}

#[test]
fn test_high_complexity_reported() {
    let source = r#"
def deep(x):
    if x == 1: pass
    if x == 2: pass
    if x == 3: pass
    if x == 4: pass
    if x == 5: pass
    if x == 6: pass
    if x == 7: pass
    if x == 8: pass
    if x == 9: pass
    if x == 10: pass
    if x == 11: pass
"#;
    let outcome = complexity::run(source);

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "warning");
    assert_eq!(outcome.issues[0].message, "High complexity in deep: 12");
    assert_eq!(outcome.issues[0].line, 2);
    assert_eq!(outcome.deduction, 5);
    assert_eq!(
        outcome.suggestions,
        vec!["Refactor deep to reduce complexity".to_string()]
    );
}

#[test]
fn test_threshold_is_not_inclusive() {
    let source = r#"
def borderline(x):
    if x == 1: pass
    if x == 2: pass
    if x == 3: pass
    if x == 4: pass
    if x == 5: pass
    if x == 6: pass
    if x == 7: pass
    if x == 8: pass
    if x == 9: pass
"#;
    // Complexity 10 exactly: not reported.
    let outcome = complexity::run(source);
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.deduction, 0);
}

#[test]
fn test_long_file_reported() {
    let mut source = String::from("\"\"\"Constants.\"\"\"\n");
    for i in 0..104 {
        source.push_str(&format!("X{} = {}\n", i, i));
    }

    let outcome = complexity::run(&source);

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "info");
    assert_eq!(outcome.issues[0].message, "File is quite long: 105 lines");
    assert_eq!(outcome.deduction, 5);
    assert!(outcome
        .suggestions
        .iter()
        .any(|s| s.contains("smaller modules")));
}

#[test]
fn test_parse_failure_reports_error_without_deduction() {
    let outcome = complexity::run("def broken(");

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "error");
    assert!(outcome.issues[0]
        .message
        .starts_with("Complexity analysis failed:"));
    assert_eq!(outcome.deduction, 0);
    assert!(outcome.suggestions.is_empty());
}
