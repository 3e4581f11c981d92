use std::path::Path;
use std::process::Command;

use super::Installer;
use crate::error::RecoverableInstallError;

pub const DEFAULT_PROGRAM: &str = "npm";
pub const DEFAULT_ARGS: [&str; 2] = ["install", "--legacy-peer-deps"];

/// Runs an external package manager with inherited console streams.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new<S: Into<String>>(program: impl Into<String>, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Installer for CommandInstaller {
    fn name(&self) -> &str {
        &self.program
    }

    fn install(&self, project_dir: &Path) -> Result<(), RecoverableInstallError> {
        // Resolve through PATH so shims like npm.cmd are found on Windows.
        let resolved = which::which(&self.program).map_err(|source| RecoverableInstallError::NotFound {
            program: self.program.clone(),
            source,
        })?;

        tracing::info!(
            program = %resolved.display(),
            args = ?self.args,
            dir = %project_dir.display(),
            "running installer"
        );

        let status = Command::new(&resolved)
            .args(&self.args)
            .current_dir(project_dir)
            .status()
            .map_err(|source| RecoverableInstallError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RecoverableInstallError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}
