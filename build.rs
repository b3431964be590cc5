use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Git hash for the startup banner; empty when building outside a checkout.
    let hash = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();

    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| !o.stdout.is_empty())
        .unwrap_or(false);

    if hash.is_empty() {
        println!("cargo:rustc-env=BUILD_VERSION=");
    } else if dirty {
        println!("cargo:rustc-env=BUILD_VERSION={}-dirty", hash);
    } else {
        println!("cargo:rustc-env=BUILD_VERSION={}", hash);
    }
}
