//! Error kinds for a generation run
//!
//! Two families, split by how the batch loop treats them:
//!
//! - [`FatalGenerationError`]: input loading, directory creation and file
//!   writes. Any of these ends the whole run.
//! - [`RecoverableInstallError`]: the dependency installer for one project.
//!   The batch loop records it against the project's domain and moves on.

use std::path::PathBuf;
use std::process::ExitStatus;

/// A failure that aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum FatalGenerationError {
    /// The input table does not exist.
    #[error("{} not found!", .0.display())]
    InputNotFound(PathBuf),

    /// The input table exists but could not be read or parsed.
    #[error("failed to parse {}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row has no `domain` column.
    #[error("{} has no `domain` column in its header row", .0.display())]
    MissingDomainColumn(PathBuf),

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render package manifest")]
    Manifest(#[from] serde_json::Error),
}

/// A dependency install failure for a single project.
#[derive(Debug, thiserror::Error)]
pub enum RecoverableInstallError {
    #[error("`{program}` not found on PATH")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to launch `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}
