//! Clipboard capability used when copying an expression.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Why a clipboard write failed.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard is reachable from this process.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard helper program exited unsuccessfully.
    #[error("Clipboard command `{program}` failed with {status}")]
    CommandFailed { program: String, status: String },

    /// IO error while talking to the clipboard.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can receive text on behalf of the platform clipboard.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: Clipboard + ?Sized> Clipboard for Box<T> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write(text)
    }
}

/// Prints copied text to standard output, for terminals without a
/// clipboard helper.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

/// Pipes copied text into an external program such as `pbcopy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a command line split on whitespace. Returns None for an
    /// empty command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// In-memory clipboard that records every write. Can be switched into a
/// failing mode to exercise the copy-failure path.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    failure: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes all fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            writes: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Make subsequent writes fail (`Some`) or succeed (`None`).
    pub fn set_failure(&mut self, reason: Option<String>) {
        self.failure = reason;
    }

    /// Every successfully written text, oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// The most recent successful write.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.failure {
            return Err(ClipboardError::Unavailable(reason.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
