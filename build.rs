//! Build script: version stamping and Windows resource embedding
//!
//! Version sources, first match wins:
//! - `RELEASE_VERSION` env (release pipeline, `YYYYMMDD-NN`)
//! - `git rev-parse --short HEAD` of the working tree (`dev-{short_sha}`)
//! - `dev`

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RELEASE_VERSION");

    let version = determine_version();
    println!("cargo:rustc-env=BUILD_VERSION={}", version);

    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        embed_windows_resource(&version);
    }
}

fn embed_windows_resource(version: &str) {
    let mut res = winres::WindowsResource::new();
    let numeric = numeric_version(version);

    res.set("FileDescription", "n01 Language Options")
        .set("ProductName", "n01")
        .set("OriginalFilename", "n01_language.exe")
        .set("FileVersion", version)
        .set("ProductVersion", version);
    res.set_version_info(winres::VersionInfo::FILEVERSION, numeric);
    res.set_version_info(winres::VersionInfo::PRODUCTVERSION, numeric);

    if let Err(e) = res.compile() {
        eprintln!("Warning: Failed to compile Windows resource: {}", e);
    }
}

/// `YYYYMMDD-NN` packs as year.month.day.build; anything else is 0.0.0.0
fn numeric_version(version: &str) -> u64 {
    let parts = version.split_once('-').and_then(|(date, build)| {
        if date.len() != 8 || !date.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some([
            date[0..4].parse::<u16>().ok()?,
            date[4..6].parse::<u16>().ok()?,
            date[6..8].parse::<u16>().ok()?,
            build.parse::<u16>().ok()?,
        ])
    });

    parts
        .unwrap_or_default()
        .iter()
        .fold(0u64, |acc, &part| (acc << 16) | part as u64)
}

fn determine_version() -> String {
    if let Ok(release_version) = env::var("RELEASE_VERSION") {
        return release_version;
    }

    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| format!("dev-{}", String::from_utf8_lossy(&output.stdout).trim()))
        .unwrap_or_else(|| "dev".to_string())
}
