//! Generate one project skeleton per row of the site listing
//!
//! Public interface for the `generate` command. Settings resolution and the
//! run itself live in `internal`.
//!
//! # Process
//!
//! 1. **Settings**: `sitegen.toml` (or `--config`) merged with CLI flags
//! 2. **Load**: read the listing; a missing or malformed file stops here,
//!    before anything is written
//! 3. **Batch**: for each record with a domain, write the skeleton under
//!    `<output>/<domain>/` and run the installer there
//! 4. **Summary**: one closing line; install failures don't change the exit code

mod internal;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Flags for the generate command. All optional; defaults come from config.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Site listing to read (default: websites.csv)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory that receives one project per domain (default: build)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Config file to use instead of ./sitegen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write files only, don't run the dependency installer
    #[arg(long)]
    pub skip_install: bool,

    /// Seed for hero-word selection, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the generate command in the current working directory
///
/// # Errors
///
/// Returns an error if:
/// - The listing is missing, malformed, or has no `domain` column
/// - The config file can't be read or parsed
/// - A directory or file can't be written
///
/// Installer failures are reported per domain and are not errors.
pub fn execute(args: GenerateArgs) -> Result<()> {
    internal::execute_generate(args)
}
