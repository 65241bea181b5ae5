use thiserror::Error;

/// Errors produced while parsing the selection record from standard input.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("selection record is missing the filename line")]
    MissingFilename,

    #[error("selection filename is empty")]
    EmptyFilename,

    #[error("selection filename is not valid utf-8")]
    FilenameNotUtf8(#[source] std::str::Utf8Error),

    #[error("selection record is missing the span line")]
    MissingSpan,

    #[error("malformed span line {0:?}: expected `<start> <end>`")]
    MalformedSpan(String),

    #[error("span {start}..{end} is out of bounds for a {len}-byte body")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("io error while reading selection")]
    Io(#[from] std::io::Error),
}

/// Errors from invoking an external analysis tool.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{tool} is not installed (not found in PATH)")]
    ToolNotFound {
        tool: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to spawn {tool}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error on {tool} stdin")]
    StdinIo {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for {tool}")]
    Wait {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed with exit code {code}")]
    ToolFailed { tool: String, code: i32 },

    #[error("{tool} wrote invalid utf-8 to stdout")]
    StdoutDecode {
        tool: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Errors from the playground share upload.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share request failed")]
    Transport(#[from] reqwest::Error),

    #[error("share service returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("share service returned an empty snippet id")]
    EmptyId,
}

/// Top-level handler error: what a dispatched command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error("nothing selected")]
    EmptySelection,
}

impl CommandError {
    /// Process exit code for this failure. A tool that ran and failed
    /// propagates its own (normalized) code; everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Runner(RunnerError::ToolFailed { code, .. }) => *code,
            _ => 1,
        }
    }
}
