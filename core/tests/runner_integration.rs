//! Runner tests against real (trivial) processes.

#![cfg(unix)]

use goed_core::archive::archive;
use goed_core::error::RunnerError;
use goed_core::runner;
use goed_core::selection::Selection;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn captures_stdout() {
    let out = runner::run("sh", &args(&["-c", "printf 'hello from tool'"]))
        .await
        .unwrap();
    assert_eq!(out, "hello from tool");
}

#[tokio::test]
async fn stdin_reaches_the_child() {
    let out = runner::run_with_stdin(b"echoed back", "cat", &args(&[]))
        .await
        .unwrap();
    assert_eq!(out, "echoed back");
}

#[tokio::test]
async fn archive_round_trips_through_a_child() {
    let sel = Selection::parse(b"main.go\n0 7\npackage main\n").unwrap();
    let out = runner::run_with_stdin(&archive(&sel), "cat", &args(&[]))
        .await
        .unwrap();
    assert_eq!(out, "main.go\n13\npackage main\n");
}

#[tokio::test]
async fn nonzero_exit_carries_the_code() {
    let err = runner::run("sh", &args(&["-c", "exit 7"])).await.unwrap_err();
    match err {
        RunnerError::ToolFailed { tool, code } => {
            assert_eq!(tool, "sh");
            assert_eq!(code, 7);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_tool_reads_as_not_installed() {
    let err = runner::run("goed-no-such-tool-xyzzy", &args(&[]))
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::ToolNotFound { .. }));
    assert!(err.to_string().contains("not installed"));
}

#[tokio::test]
async fn large_stdin_does_not_deadlock() {
    // Bigger than a pipe buffer; the child consumes while we write.
    let input = vec![b'x'; 1 << 20];
    let out = runner::run_with_stdin(&input, "cat", &args(&[]))
        .await
        .unwrap();
    assert_eq!(out.len(), 1 << 20);
}
