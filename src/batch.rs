//! Batch loop - generate, then install, one record at a time
//!
//! Records are handled strictly in input order. Generation errors end the
//! run. Installer errors are recorded against the record's domain and the
//! loop continues with the next record.

use colored::Colorize;
use std::collections::HashSet;

use crate::error::{FatalGenerationError, RecoverableInstallError};
use crate::installer::Installer;
use crate::records::Record;
use crate::scaffold::Generator;

/// A dependency install that failed for one project.
#[derive(Debug)]
pub struct InstallFailure {
    pub domain: String,
    pub error: RecoverableInstallError,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Domains generated, in processing order (duplicates included).
    pub generated: Vec<String>,
    /// Records skipped for having a blank domain.
    pub skipped: usize,
    pub install_failures: Vec<InstallFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.install_failures.is_empty()
    }

    /// One-line summary printed at the end of a run.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            "All apps generated successfully!".to_string()
        } else {
            format!(
                "Generated {} apps, {} dependency installs failed",
                self.generated.len(),
                self.install_failures.len()
            )
        }
    }
}

/// Generate and install every non-blank record.
pub fn run(
    records: &[Record],
    generator: &mut Generator,
    installer: &dyn Installer,
) -> Result<BatchReport, FatalGenerationError> {
    let mut report = BatchReport::default();
    let mut seen = HashSet::new();

    for record in records {
        if record.is_blank() {
            report.skipped += 1;
            continue;
        }

        let domain = record.domain();
        if !seen.insert(domain.to_string()) {
            tracing::warn!(domain, "duplicate domain, overwriting earlier project");
        }

        println!("{} {}", "Generating app for".bright_cyan(), domain);
        let project = generator.generate(record)?;

        if !installer.is_enabled() {
            println!("{}", "Skipping dependency install".dimmed());
        } else {
            println!("{}", format!("Installing dependencies with {}...", installer.name()).dimmed());
            if let Err(error) = installer.install(&project.root) {
                eprintln!(
                    "{} {}: {}",
                    "Dependency install failed for".red(),
                    domain,
                    error
                );
                report.install_failures.push(InstallFailure {
                    domain: project.domain.clone(),
                    error,
                });
            }
        }

        report.generated.push(project.domain);
    }

    Ok(report)
}
