pub mod command;

pub use command::CommandInstaller;

use std::path::Path;

use crate::error::RecoverableInstallError;

/// Installs a generated project's declared dependencies
pub trait Installer {
    /// Short name shown in progress output
    fn name(&self) -> &str;

    /// False when the installer never runs anything
    fn is_enabled(&self) -> bool {
        true
    }

    /// Run the install inside `project_dir`, blocking until it finishes
    fn install(&self, project_dir: &Path) -> Result<(), RecoverableInstallError>;
}

/// Installer that does nothing, for runs that only write files
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopInstaller;

impl Installer for NoopInstaller {
    fn name(&self) -> &str {
        "none"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    fn install(&self, project_dir: &Path) -> Result<(), RecoverableInstallError> {
        tracing::debug!(dir = %project_dir.display(), "skipping dependency install");
        Ok(())
    }
}

/// Build the installer for a run
pub fn get_installer(enabled: bool, program: &str, args: &[String]) -> Box<dyn Installer> {
    if enabled {
        Box::new(CommandInstaller::new(program, args.iter().cloned()))
    } else {
        Box::new(NoopInstaller)
    }
}
