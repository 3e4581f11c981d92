use anyhow::{Context, Result};
use serde_json::json;
use std::process::Command;

use sitegen::config;

const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute(json: bool, components: bool) -> Result<()> {
    if json {
        output_json(components)?;
    } else {
        output_human(components)?;
    }
    Ok(())
}

fn output_json(components: bool) -> Result<()> {
    let mut version_info = json!({
        "sitegen": CORE_VERSION,
    });

    if components {
        let (program, version) = get_installer_version()?;
        version_info["installer"] = json!({
            "program": program,
            "version": version,
        });
    }

    println!("{}", serde_json::to_string_pretty(&version_info)?);
    Ok(())
}

fn output_human(components: bool) -> Result<()> {
    println!("sitegen {CORE_VERSION}");

    if components {
        println!("\nComponents:");
        let (program, version) = get_installer_version()?;
        match version {
            Some(v) => println!("  {program}: {v} (external)"),
            None => println!("  {program}: not found"),
        }
    }

    Ok(())
}

/// Installer program from the working directory's config, and its version if it runs
fn get_installer_version() -> Result<(String, Option<String>)> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let program = config::load(&cwd)?.install.program;

    let version = which::which(&program)
        .ok()
        .and_then(|path| Command::new(path).arg("--version").output().ok())
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok((program, version))
}
