//! Clipboard sinks
//!
//! Copy requests go through [`ClipboardSink`]. Two implementations:
//! - `CommandClipboard`: pipes the text into a user-configured command
//!   (`pbcopy`, `wl-copy`, `xclip -selection clipboard`, ...)
//! - `SystemClipboard`: the platform clipboard via arboard

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard command '{command}': {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard command '{command}' exited with {status}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("clipboard command is empty")]
    EmptyCommand,
    #[error("system clipboard unavailable: {0}")]
    System(String),
}

/// Something that accepts one string per copy request
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sends text on stdin to an external command
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Parse a command line such as `xclip -selection clipboard`
    pub fn new(command_line: &str) -> Result<Self, ClipboardError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ClipboardError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let to_error = |source| ClipboardError::Command {
            command: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(to_error)?;

        // stdin is dropped at the end of the match, which signals EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Clipboard tools exit (or fork) once stdin closes; reap the child
        let status = child.wait().map_err(to_error)?;
        written.map_err(to_error)?;
        if !status.success() {
            return Err(ClipboardError::Exit {
                command: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

/// Platform clipboard (X11/Wayland/macOS/Windows) via arboard
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Connect lazily; a missing clipboard only fails at write time
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::System(e.to_string())),
            None => Err(ClipboardError::System("not connected".to_string())),
        }
    }
}

/// Pick the configured command, falling back to the system clipboard
pub fn from_config(clipboard_command: Option<&str>) -> Box<dyn ClipboardSink> {
    match clipboard_command.map(CommandClipboard::new) {
        Some(Ok(command)) => Box::new(command),
        Some(Err(e)) => {
            tracing::warn!("Ignoring clipboard_command: {}", e);
            Box::new(SystemClipboard::new())
        }
        None => Box::new(SystemClipboard::new()),
    }
}
