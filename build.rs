//! Build script for macrotrack
//!
//! Bumps a persisted build counter and exposes it, with a UTC timestamp,
//! as compile-time environment variables.

use std::fs;
use std::io;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

/// Read the last build number (0 when absent or unreadable) and store the next one
fn bump_build_number(path: &Path) -> io::Result<u64> {
    let last = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = last + 1;
    fs::write(path, next.to_string())?;
    Ok(next)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src");

    let build_number = bump_build_number(Path::new(BUILD_NUMBER_FILE))?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=MACROTRACK_BUILD_NUMBER={build_number}");
    println!("cargo:rustc-env=MACROTRACK_BUILD_TIMESTAMP={timestamp}");
    Ok(())
}
