//! Run configuration stored in `sitegen.toml`
//!
//! Every section and key is optional. A missing file yields the defaults,
//! which read `websites.csv`, write to `build/` and run
//! `npm install --legacy-peer-deps` in each generated project.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::installer::command::{DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::scaffold::{HeroWordPool, DEFAULT_HERO_WORDS};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sitegen.toml";

// =============================================================================
// Config Types
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitegenConfig {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub install: InstallSection,
    #[serde(default)]
    pub hero: HeroSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    /// Site listing, relative to the working directory
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("websites.csv")
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    /// Root that receives one directory per domain
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("build")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_true() -> bool {
    true
}
fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}
fn default_args() -> Vec<String> {
    DEFAULT_ARGS.iter().map(|a| a.to_string()).collect()
}

impl Default for InstallSection {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            program: default_program(),
            args: default_args(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroSection {
    #[serde(default = "default_words")]
    pub words: Vec<String>,
}

fn default_words() -> Vec<String> {
    DEFAULT_HERO_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            words: default_words(),
        }
    }
}

impl HeroSection {
    pub fn pool(&self) -> Result<HeroWordPool> {
        HeroWordPool::new(self.words.iter().cloned())
            .context("[hero] words must contain at least one word")
    }
}

// =============================================================================
// Load
// =============================================================================

/// Path of the default config file under `dir`
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Load `sitegen.toml` from `dir`, or defaults when it doesn't exist
pub fn load(dir: &Path) -> Result<SitegenConfig> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(SitegenConfig::default());
    }
    load_from(&path)
}

/// Load an explicit config file. The file must exist.
pub fn load_from(path: &Path) -> Result<SitegenConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config: SitegenConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
