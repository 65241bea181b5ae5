//! External tool invocation.
//!
//! One child process at a time: spawn, optionally feed stdin, capture
//! stdout, let stderr flow through to the editor, wait, normalize the exit
//! status. A nonzero exit is an error carrying the normalized code so the
//! caller can propagate it as its own exit code.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};

use crate::error::RunnerError;

/// Run `tool` with `args`, returning its stdout.
pub async fn run(tool: &str, args: &[String]) -> Result<String, RunnerError> {
    run_inner(tool, args, None).await
}

/// Like [`run`], but write `stdin` to the child before waiting. Used for
/// tools that consume the modified-file archive.
pub async fn run_with_stdin(
    stdin: &[u8],
    tool: &str,
    args: &[String],
) -> Result<String, RunnerError> {
    run_inner(tool, args, Some(stdin)).await
}

async fn run_inner(
    tool: &str,
    args: &[String],
    stdin: Option<&[u8]>,
) -> Result<String, RunnerError> {
    let bin = resolve(tool)?;
    tracing::debug!(tool, ?args, "invoking");

    let mut cmd = Command::new(&bin);
    cmd.args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
        tool: tool.to_string(),
        source,
    })?;

    let pipe = child.stdin.take();

    // Feed stdin while collecting output; the archive can exceed the pipe
    // buffer, so writing sequentially before reading would deadlock.
    let (write_res, output_res) = tokio::join!(
        feed_stdin(pipe, stdin),
        child.wait_with_output()
    );

    let output = output_res.map_err(|source| RunnerError::Wait {
        tool: tool.to_string(),
        source,
    })?;

    if !output.status.success() {
        let code = normalize_exit(output.status);
        tracing::warn!(tool, code, "tool failed");
        return Err(RunnerError::ToolFailed {
            tool: tool.to_string(),
            code,
        });
    }

    // A tool that exits cleanly without draining stdin is fine; any other
    // write failure is reported.
    if let Err(source) = write_res {
        if source.kind() != std::io::ErrorKind::BrokenPipe {
            return Err(RunnerError::StdinIo {
                tool: tool.to_string(),
                source,
            });
        }
    }

    String::from_utf8(output.stdout).map_err(|source| RunnerError::StdoutDecode {
        tool: tool.to_string(),
        source,
    })
}

async fn feed_stdin(pipe: Option<ChildStdin>, input: Option<&[u8]>) -> std::io::Result<()> {
    // Dropping the pipe is what gives the child its EOF.
    if let (Some(mut pipe), Some(input)) = (pipe, input) {
        pipe.write_all(input).await?;
        pipe.shutdown().await?;
    }
    Ok(())
}

/// Resolve the tool name to a binary up front, so a missing installation
/// reads as "gorename is not installed" instead of a raw spawn error.
fn resolve(tool: &str) -> Result<PathBuf, RunnerError> {
    which::which(tool).map_err(|source| RunnerError::ToolNotFound {
        tool: tool.to_string(),
        source,
    })
}

/// Map an exit status to a single code. Signal deaths land above 128 the
/// way shells report them.
pub fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        match (status.code(), status.signal()) {
            (Some(code), _) => code,
            (None, Some(sig)) => 128 + sig,
            (None, None) => 1,
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}
