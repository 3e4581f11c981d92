//! Internal implementation for generate command

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use sitegen::config::{self, SitegenConfig};
use sitegen::installer::{self, Installer};
use sitegen::scaffold::{Generator, HeroWordPool};
use sitegen::{batch, records};

use super::GenerateArgs;

/// Effective settings for one run, after config and flags are merged
pub struct Settings {
    pub input: PathBuf,
    pub output_root: PathBuf,
    pub pool: HeroWordPool,
    pub installer: Box<dyn Installer>,
    pub seed: Option<u64>,
}

/// Main execution logic for generate command
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let settings = resolve_settings(&cwd, &args)?;

    // Load everything before the output root is touched
    let records = records::load(&settings.input)?;

    let rng = settings
        .seed
        .map(fastrand::Rng::with_seed)
        .unwrap_or_else(fastrand::Rng::new);
    let mut generator = Generator::with_rng(&settings.output_root, settings.pool, rng);

    let report = batch::run(&records, &mut generator, settings.installer.as_ref())?;

    tracing::info!(
        generated = report.generated.len(),
        skipped = report.skipped,
        failed = report.install_failures.len(),
        "batch finished"
    );

    if report.is_clean() {
        println!("{}", report.summary().green());
    } else {
        println!("{}", report.summary().yellow());
    }

    Ok(())
}

/// Merge config file and CLI flags. Flags win; relative paths resolve against `cwd`.
pub fn resolve_settings(cwd: &Path, args: &GenerateArgs) -> Result<Settings> {
    let config: SitegenConfig = match &args.config {
        Some(path) => config::load_from(&cwd.join(path))?,
        None => config::load(cwd)?,
    };

    let input = cwd.join(args.input.as_ref().unwrap_or(&config.input.path));
    let output_root = cwd.join(args.output.as_ref().unwrap_or(&config.output.root));
    let pool = config.hero.pool()?;

    let enabled = config.install.enabled && !args.skip_install;
    let installer = installer::get_installer(enabled, &config.install.program, &config.install.args);

    Ok(Settings {
        input,
        output_root,
        pool,
        installer,
        seed: args.seed,
    })
}
