#![cfg(unix)]

mod common;

use common::scratch_dir;
use qgen_bootstrap::entities::{Invocation, ProcessEnvironment};
use qgen_bootstrap::error::BootstrapError;
use qgen_bootstrap::service::interpreter;
use qgen_bootstrap::service::{CommandRunner, SystemRunner};

#[test]
fn test_status_reports_exit_code() {
    let invocation = Invocation::new("sh").args(["-c", "exit 3"]);

    let status = SystemRunner.status(&invocation).unwrap();

    assert_eq!(status.code, Some(3));
    assert!(!status.success());
}

#[test]
fn test_output_sees_environment_and_working_dir() {
    let dir = scratch_dir();
    let mut env = ProcessEnvironment::new();
    env.set("QGEN_TEST_VALUE", "models");
    let invocation = Invocation::new("sh")
        .args(["-c", "printf '%s %s' \"$QGEN_TEST_VALUE\" \"$(pwd)\""])
        .current_dir(&dir)
        .env(&env);

    let output = SystemRunner.output(&invocation).unwrap();

    assert!(output.status.success());
    let canonical = dir.canonicalize().unwrap();
    assert_eq!(output.stdout, format!("models {}", canonical.display()));
}

#[test]
fn test_missing_program_is_an_io_error() {
    let invocation = Invocation::new("qgen-no-such-program-7f3a");

    let err = SystemRunner.status(&invocation).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_locate_skips_unavailable_candidates() {
    let dir = scratch_dir();
    let candidates = vec!["qgen-no-such-python-7f3a".to_string()];

    let err = interpreter::locate(&SystemRunner, &candidates, &dir).unwrap_err();

    assert!(matches!(err, BootstrapError::InterpreterMissing(ref tried) if tried == &candidates));
    assert_eq!(err.exit_code(), 1);
}
