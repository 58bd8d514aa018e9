//! Error type shared by every grubsort operation.
//!
//! No variant is fatal: the UI reports the error and returns to the state it
//! was in before the operation started.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrubError {
    /// A source file is missing or unreadable.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Staging a file before the privileged copy failed.
    #[error("Failed to stage file: {0}")]
    Write(String),

    /// The elevation helper exited non-zero or could not be spawned.
    #[error("Failed to {action}: {output}")]
    Privilege { action: String, output: String },

    /// The boot menu generator exited non-zero.
    #[error("Boot menu generator failed ({status}):\n{output}")]
    ExternalTool { status: String, output: String },

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl GrubError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GrubError::Read {
            path: path.into(),
            source,
        }
    }

    /// Captured tool output, if this error carries any.
    pub fn output(&self) -> Option<&str> {
        match self {
            GrubError::Privilege { output, .. } | GrubError::ExternalTool { output, .. } => {
                Some(output)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = GrubError::read(
            "/boot/grub/grub.cfg",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/boot/grub/grub.cfg"));
        assert!(err.output().is_none());
    }

    #[test]
    fn tool_errors_expose_output() {
        let err = GrubError::ExternalTool {
            status: "exit status: 1".to_string(),
            output: "grub-mkconfig: error: boom".to_string(),
        };
        assert_eq!(err.output(), Some("grub-mkconfig: error: boom"));
    }
}
