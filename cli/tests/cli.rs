use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn ippcode() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ippcode"));
    command.arg("--no-color");
    command
}

fn run_with_stdin(mut command: Command, input: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ippcode");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for ippcode")
}

fn parse_stdin(input: &str) -> Output {
    run_with_stdin(ippcode(), input)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn emits_xml_on_success() {
    let output = parse_stdin(".ippcode24\nMOVE GF@x int@5\n");
    assert_eq!(output.status.code(), Some(0));
    let xml = stdout(&output);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<instruction order=\"1\" opcode=\"MOVE\">"));
    assert!(xml.contains("<arg1 type=\"var\">GF@x</arg1>"));
    assert!(xml.contains("<arg2 type=\"int\">5</arg2>"));
}

#[test]
fn exit_codes_for_invalid_programs() {
    let cases = [
        ("MOVE GF@x int@5", 21),
        ("", 21),
        (".ippcode24\nFOO x", 22),
        (".ippcode24\nDEFVAR GF@x GF@y", 23),
        (".ippcode24\nWRITE string@bad\\q", 23),
    ];
    for (input, code) in cases {
        let output = parse_stdin(input);
        assert_eq!(output.status.code(), Some(code), "input: {:?}", input);
        assert!(output.stdout.is_empty(), "no output expected for {:?}", input);
        assert!(!output.stderr.is_empty(), "diagnostic expected for {:?}", input);
    }
}

#[test]
fn comment_lines_do_not_change_output() {
    let plain = parse_stdin(".ippcode24\nMOVE GF@x int@5");
    let commented = parse_stdin(".ippcode24\n# comment only\n\nMOVE GF@x int@5");
    assert_eq!(plain.stdout, commented.stdout);
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = parse_stdin_with_args(&["--definitely-not-a-flag"], "");
    assert_eq!(output.status.code(), Some(10));
}

#[test]
fn help_exits_successfully() {
    let output = parse_stdin_with_args(&["--help"], "");
    assert_eq!(output.status.code(), Some(0));
}

fn parse_stdin_with_args(args: &[&str], input: &str) -> Output {
    let mut command = ippcode();
    command.args(args);
    run_with_stdin(command, input)
}

#[test]
fn missing_source_file_is_input_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("missing.ippcode");
    let output = parse_stdin_with_args(&["--source", missing.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(11));
}

#[test]
fn non_utf8_input_is_input_error() {
    let mut command = ippcode();
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ippcode");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(&[0x2e, 0xff, 0xfe, 0x0a])
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for ippcode");
    assert_eq!(output.status.code(), Some(11));
}

#[test]
fn source_and_output_files() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = dir.path().join("prog.ippcode");
    let target = dir.path().join("prog.xml");
    std::fs::write(&source, ".IPPcode24\nWRITE string@hi\n").unwrap();

    let output = parse_stdin_with_args(
        &[
            "parse",
            "--source",
            source.to_str().unwrap(),
            "--output",
            target.to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let xml = std::fs::read_to_string(&target).unwrap();
    assert!(xml.contains("<arg1 type=\"string\">hi</arg1>"));
}

#[test]
fn unwritable_output_is_output_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    // A directory cannot be opened as an output file.
    let output = parse_stdin_with_args(
        &["--output", dir.path().to_str().unwrap()],
        ".ippcode24\nBREAK",
    );
    assert_eq!(output.status.code(), Some(12));
}

#[test]
fn check_mode_prints_nothing() {
    let output = parse_stdin_with_args(&["--check"], ".ippcode24\nBREAK");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let output = parse_stdin_with_args(&["--check"], ".ippcode24\nBREAK x");
    assert_eq!(output.status.code(), Some(23));
}

#[test]
fn fixture_suite_passes() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let output = parse_stdin_with_args(&["test", fixtures.to_str().unwrap()], "");
    assert_eq!(
        output.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn fixture_runner_reports_failures() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        dir.path().join("wrong.test.ippcode"),
        "---\nexpect_exit_code = 0\n---\n.ippcode24\nFOO\n",
    )
    .unwrap();

    let output = parse_stdin_with_args(&["test", dir.path().to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected exit code 0, got 22"), "{}", stderr);
}

#[test]
fn fixture_categories_filter() {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let output = parse_stdin_with_args(
        &["test", fixtures.to_str().unwrap(), "-c", "header"],
        "",
    );
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 passed"), "{}", stderr);
}
