// Unit tests for the naming-convention check

use revet_rs::checks::naming;

#[test]
fn test_snake_case_names_pass() {
    let source = r#"
def main():
    pass

def load_config(path):
    pass

class ConfigLoader:
    def __init__(self):
        pass
"#;
    let outcome = naming::run(source);

    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.deduction, 0);
}

#[test]
fn test_camel_case_function_flagged() {
    let source = r#"
def MyFunc():
    pass
"#;
    let outcome = naming::run(source);

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "warning");
    assert_eq!(
        outcome.issues[0].message,
        "Function name MyFunc does not follow snake_case convention"
    );
    assert_eq!(outcome.issues[0].line, 2);
    assert_eq!(outcome.deduction, 2);
    assert_eq!(
        outcome.suggestions,
        vec!["Rename MyFunc to follow snake_case".to_string()]
    );
}

#[test]
fn test_lowercase_class_flagged() {
    let source = r#"
class config_loader:
    pass
"#;
    let outcome = naming::run(source);

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(
        outcome.issues[0].message,
        "Class name config_loader does not follow PascalCase convention"
    );
    assert_eq!(
        outcome.suggestions,
        vec!["Rename config_loader to follow PascalCase".to_string()]
    );
}

#[test]
fn test_definitions_found_at_any_depth() {
    let source = r#"
class Widget:
    def BadMethod(self):
        pass

if True:
    def alsoBad():
        pass
"#;
    let outcome = naming::run(source);

    assert_eq!(outcome.issues.len(), 2);
    assert!(outcome
        .issues
        .iter()
        .any(|i| i.message.contains("BadMethod")));
    assert!(outcome.issues.iter().any(|i| i.message.contains("alsoBad")));
    assert_eq!(outcome.deduction, 4);
}

#[test]
fn test_each_violation_deducts() {
    let source = r#"
def First():
    pass

def Second():
    pass

def Third():
    pass
"#;
    let outcome = naming::run(source);

    assert_eq!(outcome.issues.len(), 3);
    assert_eq!(outcome.deduction, 6);
    assert_eq!(outcome.suggestions.len(), 3);
}

#[test]
fn test_syntax_error_charges_flat_penalty() {
    let outcome = naming::run("def broken(");

    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, "error");
    assert!(outcome.issues[0].message.starts_with("Syntax error:"));
    assert!(outcome.issues[0].line >= 1);
    assert_eq!(outcome.deduction, 20);
    assert!(outcome.suggestions.is_empty());
}

#[test]
fn test_dunder_methods_not_flagged() {
    let source = r#"
class Widget:
    def __repr__(self):
        return "Widget"
"#;
    let outcome = naming::run(source);
    assert!(outcome.issues.is_empty());
}
