#![cfg(unix)]

use std::sync::Arc;

use anyhow::Result;
use docket_process::{CaptureOptions, ProcessError, ProcessInvocation, run_process_with_capture};
use docket_telemetry::GroupLogger;
use docket_test_support::RecordingSink;
use tracing::Level;

#[test]
fn false_with_check_return_reports_exit_code_one() -> Result<()> {
    let invocation = ProcessInvocation::new(["false"])?;
    let options = CaptureOptions::default().with_check_return(true);

    let err = run_process_with_capture(&invocation, options, None).err();

    assert_eq!(err.as_ref().and_then(ProcessError::exit_code), Some(1));
    assert!(matches!(err, Some(ProcessError::CommandFailed { .. })));
    Ok(())
}

#[test]
fn true_with_check_return_succeeds() -> Result<()> {
    let invocation = ProcessInvocation::new(["true"])?;
    let options = CaptureOptions::default().with_check_return(true);

    let result = run_process_with_capture(&invocation, options, None)?;

    assert!(result.success());
    assert!(result.stdout().is_empty());
    assert!(result.stderr().is_empty());
    Ok(())
}

#[test]
fn missing_program_is_a_launch_error() -> Result<()> {
    let invocation = ProcessInvocation::new(["docket-definitely-not-installed", "--version"])?;
    let sink = Arc::new(RecordingSink::new());
    let logger = GroupLogger::new(sink.clone());

    let err = run_process_with_capture(&invocation, CaptureOptions::default(), Some(&logger)).err();

    match err {
        Some(ProcessError::Launch { program, source }) => {
            assert_eq!(program, "docket-definitely-not-installed");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected launch error, got {other:?}"),
    }
    assert!(sink.records().is_empty());
    Ok(())
}

#[test]
fn no_logger_never_fails_and_still_captures() -> Result<()> {
    let invocation = ProcessInvocation::new(["sh", "-c", "echo out; echo err >&2"])?;

    let result = run_process_with_capture(&invocation, CaptureOptions::default(), None)?;

    assert_eq!(result.stdout_lines(), vec!["out"]);
    assert_eq!(result.stderr_lines(), vec!["err"]);
    Ok(())
}

#[test]
fn invalid_utf8_output_is_logged_without_the_bad_bytes() -> Result<()> {
    let invocation = ProcessInvocation::new(["sh", "-c", r"printf 'page\377 1\nok\n'"])?;
    let sink = Arc::new(RecordingSink::new());
    let logger = GroupLogger::new(sink.clone());
    let options = CaptureOptions::default().with_log_return(false);

    let result = run_process_with_capture(&invocation, options, Some(&logger))?;

    assert_eq!(result.stdout(), b"page\xff 1\nok\n");
    assert_eq!(sink.messages(), vec!["stdout:", "page 1", "ok"]);
    Ok(())
}

#[test]
fn explicit_environment_replaces_inherited_one() -> Result<()> {
    let invocation = ProcessInvocation::new([
        "/bin/sh",
        "-c",
        r#"printf '%s|%s\n' "$DOCKET_PROBE" "${DOCKET_INHERITED_PROBE:-unset}""#,
    ])?
    .with_env([("DOCKET_PROBE", "42")]);

    let result = run_process_with_capture(&invocation, CaptureOptions::quiet(), None)?;

    assert_eq!(result.stdout_lines(), vec!["42|unset"]);
    Ok(())
}

#[test]
fn every_line_of_one_run_shares_the_correlation_id() -> Result<()> {
    let invocation = ProcessInvocation::new(["sh", "-c", "echo a; echo b >&2; exit 2"])?;
    let sink = Arc::new(RecordingSink::new());
    let mut logger = GroupLogger::new(sink.clone());

    run_process_with_capture(&invocation, CaptureOptions::default(), Some(&logger))?;
    let first_group = logger.group();
    let second_group = logger.renew_group();
    run_process_with_capture(&invocation, CaptureOptions::default(), Some(&logger))?;

    let records = sink.records();
    assert_eq!(records.len(), 10);
    let (first, second) = records.split_at(5);
    assert!(first.iter().all(|record| record.group == first_group));
    assert!(second.iter().all(|record| record.group == Some(second_group)));
    assert_eq!(
        first.iter().filter(|record| record.level == Level::WARN).count(),
        2
    );
    Ok(())
}
