//! Writes to protected system paths.
//!
//! Everything that lands under /etc goes through [`PrivilegedInstaller`] so the
//! session logic can run against a fake in tests.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use crate::error::GrubError;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Regular,
    Executable,
}

pub trait PrivilegedInstaller {
    /// Replace `target` with `contents`.
    fn install(&self, target: &Path, contents: &[u8], mode: InstallMode) -> Result<(), GrubError>;
}

/// Stages the contents in a temp file and copies it into place with an
/// elevation helper such as pkexec.
#[derive(Debug, Clone)]
pub struct PkexecInstaller {
    elevate: PathBuf,
}

impl PkexecInstaller {
    pub fn new(elevate: impl Into<PathBuf>) -> Self {
        PkexecInstaller {
            elevate: elevate.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.elevate_command)
    }

    fn run_elevated<I, S>(&self, action: &str, args: I) -> Result<(), GrubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.elevate)
            .args(args)
            .output()
            .map_err(|e| GrubError::Privilege {
                action: action.to_string(),
                output: format!("could not run {}: {}", self.elevate.display(), e),
            })?;

        if !output.status.success() {
            return Err(GrubError::Privilege {
                action: action.to_string(),
                output: combined_output(&output),
            });
        }
        Ok(())
    }
}

impl PrivilegedInstaller for PkexecInstaller {
    fn install(&self, target: &Path, contents: &[u8], mode: InstallMode) -> Result<(), GrubError> {
        let mut staged = NamedTempFile::with_prefix("grubsort-")
            .map_err(|e| GrubError::Write(format!("failed to create temporary file: {}", e)))?;
        staged
            .write_all(contents)
            .and_then(|_| staged.flush())
            .map_err(|e| GrubError::Write(format!("failed to write temporary file: {}", e)))?;

        let action = format!("copy to {}", target.display());
        self.run_elevated(
            &action,
            [OsStr::new("cp"), staged.path().as_os_str(), target.as_os_str()],
        )?;

        if mode == InstallMode::Executable {
            let action = format!("make {} executable", target.display());
            self.run_elevated(&action, [OsStr::new("chmod"), OsStr::new("+x"), target.as_os_str()])?;
        }

        log::info!("Installed {} ({} bytes)", target.display(), contents.len());
        Ok(())
    }
}

/// stdout followed by stderr, lossily decoded.
pub(crate) fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
