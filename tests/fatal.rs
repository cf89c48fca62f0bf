//! Fatal conditions must terminate the process with status 1 and a message on the standard
//! error.
//!
//! Each test re-runs this test binary, restricted to itself, with `QUARK_FATAL_CHILD` set. The
//! child performs the fatal call while the parent feeds its standard input and checks the
//! outcome.

use std::env;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const CHILD: &str = "QUARK_FATAL_CHILD";

fn is_child() -> bool {
    env::var_os(CHILD).is_some()
}

/// Installs the same quiet-by-default subscriber as the demo program.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy("");
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_child(test: &str, input: &[u8]) -> Output {
    let mut child = Command::new(env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading everything.
    let _ = child.stdin.take().unwrap().write_all(input);
    child.wait_with_output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn wrong_length_character_exits_with_status_1() {
    if is_child() {
        let c = quark::get_char(None);
        panic!("read {c:?} instead of exiting");
    }

    let output = run_child("wrong_length_character_exits_with_status_1", b"yes\n");
    assert_eq!(output.status.code(), Some(quark::FATAL_EXIT_CODE));
    assert!(
        stderr(&output).ends_with("Error: Expected a single character\n"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn end_of_input_for_character_exits_with_status_1() {
    if is_child() {
        let c = quark::get_char(None);
        panic!("read {c:?} instead of exiting");
    }

    let output = run_child("end_of_input_for_character_exits_with_status_1", b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).ends_with("Error: Failed to read input: end of input\n"));
}

#[test]
fn end_of_input_for_string_exits_with_status_1() {
    if is_child() {
        let line = quark::get_string("Name: ");
        panic!("read {line:?} instead of exiting");
    }

    let output = run_child("end_of_input_for_string_exits_with_status_1", b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).ends_with("Error: Failed to read input: end of input\n"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Name: "));
}

#[test]
fn end_of_input_while_retrying_exits_with_status_1() {
    if is_child() {
        let n = quark::get_int("n: ");
        panic!("read {n} instead of exiting");
    }

    let output = run_child("end_of_input_while_retrying_exits_with_status_1", b"abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("n: Invalid input. Please enter an integer.\nn: "));
    assert!(stderr(&output).ends_with("Error: Failed to read input: end of input\n"));
}

#[test]
fn fatal_macro_exits_with_status_1() {
    if is_child() {
        quark::fatal!("Age cannot be {}", "negative");
    }

    let output = run_child("fatal_macro_exits_with_status_1", b"");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).ends_with("Error: Age cannot be negative\n"));
}

#[test]
fn fatal_message_is_reported_once_with_quiet_logging() {
    if is_child() {
        init_tracing();
        let c = quark::get_char(None);
        panic!("read {c:?} instead of exiting");
    }

    let output = run_child("fatal_message_is_reported_once_with_quiet_logging", b"");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).matches("end of input").count(), 1);
}
