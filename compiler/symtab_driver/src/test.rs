use symtab_diagnostic::Severity;
use symtab_table::Limits;

use crate::{
    replay,
    script::{parse_line, Command, ScriptError},
    Options, Outcome,
};

fn replay_to_string(source: &str, options: Options) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = replay(source, options, &mut out).unwrap();

    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn parses_every_command() {
    assert_eq!(parse_line("enter", 1), Ok(Some(Command::Enter)));
    assert_eq!(parse_line("  exit  ", 2), Ok(Some(Command::Exit)));
    assert_eq!(parse_line("dump # everything", 3), Ok(Some(Command::Dump)));
    assert_eq!(
        parse_line("resolve counter", 4),
        Ok(Some(Command::Resolve { name: "counter".to_owned() }))
    );
    assert_eq!(
        parse_line("declare f func function", 5),
        Ok(Some(Command::Declare {
            name: "f".to_owned(),
            ty: "func".to_owned(),
            element_kind: "function".to_owned(),
        }))
    );
}

#[test]
fn skips_blank_lines_and_comments() {
    assert_eq!(parse_line("", 1), Ok(None));
    assert_eq!(parse_line("   ", 2), Ok(None));
    assert_eq!(parse_line("# declare x int var", 3), Ok(None));
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!(
        parse_line("declare x int", 7),
        Err(ScriptError::WrongArity {
            command: "declare",
            expected: 3,
            found: 2,
            line: 7,
        })
    );
    assert_eq!(
        parse_line("push", 8),
        Err(ScriptError::UnknownCommand { command: "push".to_owned(), line: 8 })
    );
}

#[test]
fn replays_shadowing() {
    let source = "\
enter
declare a int var
enter
declare a char var
resolve a
exit
resolve a
exit
";

    let (outcome, output) = replay_to_string(source, Options::default());

    assert!(!outcome.has_errors());
    assert!(outcome.diagnostics.is_empty());

    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("char variable declared at line 4"));
    assert!(lines[1].contains("int variable declared at line 2"));
}

#[test]
fn collects_semantic_errors_and_continues() {
    let source = "\
enter
declare f func function
declare f int var
resolve missing
frobnicate
resolve f
exit
";

    let (outcome, output) = replay_to_string(source, Options::default());

    assert!(!outcome.aborted);
    assert!(outcome.has_errors());
    assert_eq!(outcome.diagnostics.len(), 3);

    let duplicate = &outcome.diagnostics[0];
    assert_eq!(duplicate.line, Some(3));
    assert_eq!(duplicate.related[0].line, 2);

    assert_eq!(outcome.diagnostics[1].line, Some(4));
    assert_eq!(outcome.diagnostics[2].line, Some(5));

    assert!(output.contains("f -> scope"));
    assert!(output.contains("func function declared at line 2"));
}

#[test]
fn structural_error_aborts() {
    let source = "\
enter
exit
exit
declare never int var
";

    let (outcome, _) = replay_to_string(source, Options::default());

    assert!(outcome.aborted);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].line, Some(3));
    assert!(outcome.diagnostics[0].message.contains("no open scope"));
}

#[test]
fn declaring_without_scope_aborts() {
    let (outcome, _) =
        replay_to_string("declare x int var\n", Options::default());

    assert!(outcome.aborted);
    assert!(outcome.has_errors());
}

#[test]
fn open_scopes_are_dumped_and_warned() {
    let source = "\
enter
declare total int var
declare items int array
";

    let options = Options { limits: Limits::default(), dump_symbols: true };
    let (outcome, output) = replay_to_string(source, options);

    assert!(!outcome.has_errors());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Warning);

    assert!(output.starts_with("scope #0"));
    assert!(output.contains("total"));
    assert!(output.contains("array"));
}

#[test]
fn limits_come_from_options() {
    let options = Options { limits: Limits::new(4, 9), dump_symbols: false };
    let (outcome, _) =
        replay_to_string("enter\ndeclare toolong int var\nexit\n", options);

    assert!(!outcome.aborted);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.diagnostics[0].message.contains("toolong"));
}

#[test]
fn tag_limit_applies_to_the_written_spelling() {
    let source = "\
enter
declare x int var
declare p ptr param
declare q pointer var
declare r int parameter
resolve x
exit
";

    let options = Options { limits: Limits::new(99, 5), dump_symbols: false };
    let (outcome, output) = replay_to_string(source, options);

    assert!(!outcome.aborted);
    assert_eq!(outcome.diagnostics.len(), 2);

    assert_eq!(outcome.diagnostics[0].line, Some(4));
    assert!(outcome.diagnostics[0].message.contains("`pointer`"));
    assert_eq!(outcome.diagnostics[1].line, Some(5));
    assert!(outcome.diagnostics[1].message.contains("`parameter`"));

    assert!(output.contains("x -> scope #0 (depth 0): index 0, address 0"));
}
