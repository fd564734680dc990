//! Stamps the idk binary with the commit it was built from and when.
//!
//! `IDK_BUILD_GIT_HASH` / `IDK_BUILD_TIMESTAMP` in the environment win, so
//! packagers building from a tarball can supply both.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const UNKNOWN: &str = "unknown";

fn main() {
    for var in ["IDK_BUILD_GIT_HASH", "IDK_BUILD_TIMESTAMP"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    watch_git_head();

    let commit = std::env::var("IDK_BUILD_GIT_HASH")
        .ok()
        .or_else(|| capture("git", &["describe", "--always", "--dirty", "--abbrev=12"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let built_at = std::env::var("IDK_BUILD_TIMESTAMP")
        .ok()
        .or_else(|| capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]))
        .unwrap_or_else(epoch_seconds);

    println!("cargo:rustc-env=IDK_BUILD_GIT_HASH={commit}");
    println!("cargo:rustc-env=IDK_BUILD_TIMESTAMP={built_at}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch_ref = std::fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(branch_ref) = branch_ref {
        println!("cargo:rerun-if-changed=.git/{branch_ref}");
    }
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn epoch_seconds() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => format!("unix:{}", elapsed.as_secs()),
        Err(_) => UNKNOWN.to_string(),
    }
}
