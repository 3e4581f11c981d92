//! End-to-end tests against the built binary
//!
//! Each test runs `sitegen` inside its own temporary working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn sitegen(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitegen"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("SITEGEN_LOG")
        .output()
        .expect("Failed to run sitegen")
}

#[test]
fn test_missing_listing_exits_one() {
    let tmp = TempDir::new().unwrap();

    let output = sitegen(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("websites.csv not found!"), "stderr: {stderr}");
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_generate_without_install() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("websites.csv"),
        "domain,title,phone,address\nalpha,Alpha Co,555-1,1 Main St\n,Skip,,\n",
    )
    .unwrap();

    let output = sitegen(tmp.path(), &["generate", "--skip-install", "--seed", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating app for alpha"));
    assert!(stdout.contains("Skipping dependency install"));
    assert!(!stdout.contains("Installing dependencies"));
    assert!(stdout.contains("All apps generated successfully!"));

    let build = tmp.path().join("build");
    assert_eq!(fs::read_dir(&build).unwrap().count(), 1);
    let index = fs::read_to_string(build.join("alpha/index.html")).unwrap();
    assert!(index.contains("<title>Alpha Co</title>"));
}

#[test]
fn test_unavailable_installer_still_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("websites.csv"), "domain\none\ntwo\n").unwrap();
    fs::write(
        tmp.path().join("sitegen.toml"),
        "[install]\nprogram = \"sitegen-no-such-installer\"\n",
    )
    .unwrap();

    let output = sitegen(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Dependency install failed for one"), "stderr: {stderr}");
    assert!(stderr.contains("Dependency install failed for two"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Installing dependencies with sitegen-no-such-installer..."));
    assert!(stdout.contains("Generated 2 apps, 2 dependency installs failed"));
    assert!(tmp.path().join("build/two/package.json").is_file());
}

#[cfg(unix)]
#[test]
fn test_one_failing_install_of_three() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("websites.csv"), "domain\nfirst\nsecond\nthird\n").unwrap();
    // Fails only when run inside build/second
    fs::write(
        tmp.path().join("sitegen.toml"),
        "[install]\nprogram = \"sh\"\nargs = ['-c', 'test \"$(basename \"$(pwd -P)\")\" != second']\n",
    )
    .unwrap();

    let output = sitegen(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.matches("Installing dependencies with sh...").count(), 3);
    assert!(stderr.contains("Dependency install failed for second"), "stderr: {stderr}");
    assert!(!stderr.contains("Dependency install failed for first"));
    assert!(!stderr.contains("Dependency install failed for third"));
    assert!(stdout.contains("Generated 3 apps, 1 dependency installs failed"));

    for domain in ["first", "second", "third"] {
        assert!(tmp.path().join("build").join(domain).join("src/App.jsx").is_file());
    }
}

#[test]
fn test_malformed_listing_exits_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("websites.csv"), "domain,title\nalpha,A\nbeta\n").unwrap();

    let output = sitegen(tmp.path(), &["generate", "--skip-install"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_version_json() {
    let tmp = TempDir::new().unwrap();

    let output = sitegen(tmp.path(), &["version", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sitegen"], env!("CARGO_PKG_VERSION"));
}
