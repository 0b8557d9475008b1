//! Build script for embedding frontend assets.
//!
//! In release mode, this builds the frontend with Trunk and prepares the
//! dist/ directory for rust-embed to include in the binary.
//!
//! In debug mode, this script does nothing (rust-embed reads dist/ from the
//! filesystem at runtime, and the server falls back to the rendered landing
//! page when it is missing).

fn main() {
    // The frontend build itself goes through this script; don't recurse.
    if std::env::var_os("CARGO_FEATURE_BACKEND").is_none() {
        return;
    }

    #[cfg(not(debug_assertions))]
    {
        use std::process::Command;

        println!("cargo:rerun-if-changed=src/frontend");
        println!("cargo:rerun-if-changed=src/landing.rs");
        println!("cargo:rerun-if-changed=Trunk.toml");
        println!("cargo:rerun-if-changed=index.html");

        println!("cargo:warning=Building frontend with Trunk...");

        let status = Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
            .expect("Failed to execute trunk command. Is trunk installed?");

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure trunk is installed and the frontend builds successfully.",
                status.code()
            );
        }

        println!("cargo:warning=Frontend build completed successfully");
    }
}
