use std::fs;

use doorlang::{
    error::{ParseError, RuntimeError},
    interpreter::{parser::utils::MAX_NESTING, source::Source, value::Value},
    parse_source, run_with,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "door"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        let mut output = Vec::<u8>::new();
        if let Err(e) = run_with(&code, input.as_bytes(), &mut output) {
            panic!("Program {path:?} failed:\n{code}\nError: {e}");
        }
        assert_eq!(String::from_utf8(output).unwrap(), expected, "output of {path:?}");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn output_of(src: &str, input: &str) -> String {
    let mut output = Vec::<u8>::new();
    if let Err(e) = run_with(src, input.as_bytes(), &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).unwrap()
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src, ""), expected);
}

fn runtime_error(src: &str) -> (String, RuntimeError) {
    let mut output = Vec::<u8>::new();
    let error = match run_with(src, "".as_bytes(), &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.downcast::<RuntimeError>()
                   .unwrap_or_else(|e| panic!("Expected a runtime error, got {e}")),
    };
    (String::from_utf8(output).unwrap(), *error)
}

fn parse_error(src: &str) -> ParseError {
    match run_with(src, "".as_bytes(), std::io::sink()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => *e.downcast::<ParseError>()
                    .unwrap_or_else(|e| panic!("Expected a parse error, got {e}")),
    }
}

#[test]
fn assignment_and_print() {
    assert_output("{ x = 1; show(x); }", "1\n");
}

#[test]
fn until_loop_counts() {
    assert_output("{ x = 0; until (x < 3) { show(x); x = x + 1; } }",
                  "0\n1\n2\n");
}

#[test]
fn if_else() {
    assert_output("{ if (true) show(1); else show(2); }", "1\n");
    assert_output("{ if (false) show(1); else show(2); }", "2\n");
}

#[test]
fn cross_type_equality_never_errors() {
    assert_output(r#"{ show(1 == "1"); }"#, "false\n");
    assert_output("{\na = \"a\";\nb = \"a\";\nc = \"b\";\nshow(a == b);\nshow(a == c);\nshow(true == true);\nshow(2 != 2);\n}",
                  "true\nfalse\ntrue\nfalse\n");
}

#[test]
fn strings_extend_to_the_last_quote_on_their_line() {
    assert_output(r#"{ show("a" == "b"); }"#, "a\" == \"b\n");
}

#[test]
fn division_by_zero_is_fatal() {
    let (output, error) = runtime_error("{ show(1/0); show(2); }");
    assert_eq!(output, "");
    assert_eq!(error, RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn rebinding_changes_type() {
    assert_output("{ x = 1; x = true; show(x); }", "true\n");
    assert_output(r#"{ x = "one"; x = 1; show(x + 1); }"#, "2\n");
}

#[test]
fn integer_division_truncates_toward_zero() {
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (6, 3)] {
        assert_output(&format!("{{ show({a} / {b}); }}"), &format!("{}\n", a / b));
    }
}

#[test]
fn precedence_and_unary_operators() {
    assert_output("{ show(2 + 3 * 4); show((2 + 3) * 4); show(-2 * -3); show(+5 - -5); }",
                  "14\n20\n6\n10\n");
    assert_output("{ show(!(1 > 2)); show(!!true); }", "true\ntrue\n");
    assert_output("{ show(1 < 2 and 3 > 4 or true); }", "true\n");
}

#[test]
fn relational_chains_are_syntax_errors() {
    assert_eq!(parse_error("{ show(1 < 2 < 3); }"),
               ParseError::UnexpectedToken { token: "<".to_string(),
                                             line:  1, });
}

#[test]
fn comments_run_to_the_end_of_their_line() {
    assert_output("{\n  x = 1; // first\n  // whole line\n  show(x); // done\n}",
                  "1\n");
}

#[test]
fn lines_are_joined_without_separators() {
    assert_output("{\nab\nc = 5;\nshow(abc);\n}", "5\n");
}

#[test]
fn reserved_keywords_are_rejected() {
    assert_eq!(parse_error("{ over = 1; }"),
               ParseError::ReservedKeyword { keyword: "over".to_string(),
                                             line:    1, });
}

#[test]
fn errors_report_the_original_line() {
    let (output, error) = runtime_error("{\n  show(1);\n\n  show(y);\n}");
    assert_eq!(output, "1\n");
    assert_eq!(error,
               RuntimeError::UnknownVariable { name: "y".to_string(),
                                               line: 4, });
}

#[test]
fn type_errors_name_the_operator_and_operands() {
    let (_, error) = runtime_error("{ x = 1 + true; }");
    assert_eq!(error.to_string(),
               "Error on line 1: Type error: Cannot apply '+' to integer and boolean.");

    let (_, error) = runtime_error(r#"{ x = -"a"; }"#);
    assert_eq!(error.to_string(),
               "Error on line 1: Type error: Cannot apply unary '-' to string.");
}

#[test]
fn conditions_are_not_coerced() {
    let (_, error) = runtime_error("{ x = 1; until (x) x = 0; }");
    assert_eq!(error,
               RuntimeError::ExpectedBoolean { found: "integer",
                                               line:  1, });
}

#[test]
fn input_is_read_from_the_console() {
    assert_eq!(output_of("{ n = door(); until (n > 0) { show(n); n = n - 1; } }", "3\n"),
               "3\n2\n1\n");
}

#[test]
fn final_bindings_are_returned() {
    let env = run_with("{ x = 2; y = x * x; b = y == 4; }", "".as_bytes(), std::io::sink()).unwrap();
    assert_eq!(env.get("y"), Some(&Value::Integer(4)));
    assert_eq!(env.get("b"), Some(&Value::Bool(true)));
    assert_eq!(env.len(), 3);
}

#[test]
fn parsing_the_same_source_twice_gives_the_same_tree() {
    let source = Source::from_text("{ x = 0; until (x < 3) { if (x == 1) show(x); else show(-x); x = x + 1; } }");
    assert_eq!(parse_source(&source).unwrap(), parse_source(&source).unwrap());
}

#[test]
fn invalid_characters_are_skipped() {
    assert_output("{ x = 1; $ show(x); }", "1\n");
}

#[test]
fn deeply_nested_programs_are_syntax_errors() {
    let depth = 200_000;
    let src = format!("{{\nx = {}1{};\n}}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_error(&src),
               ParseError::NestingTooDeep { limit: MAX_NESTING,
                                            line:  2, });

    let src = format!("{{ x = {}7{}; show(x); }}", "(".repeat(100), ")".repeat(100));
    assert_output(&src, "7\n");
}
