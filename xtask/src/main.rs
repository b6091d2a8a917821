//! Build automation for the kshim workspace.
//!
//! `cargo xtask build-matrix` runs the abi-test suite at a selector just
//! below and just above every documented version threshold, so every
//! era's cfg-gated behavioral tests execute against a stub kernel built
//! for that era, then asserts that out-of-range and unparseable selectors
//! fail the build with the expected diagnostic. This is the build-level
//! half of the era-partition property; the value-level half lives in the
//! version unit tests.

use std::env;
use std::process::{Command, Output};

use anyhow::{bail, ensure, Context, Result};

/// Selectors whose era-specific tests must pass, straddling every
/// documented threshold.
const MUST_PASS_TESTS: &[&str] = &[
    "3.10.0",  // support floor
    "3.19.8",  // last explicit-mode access_ok era
    "4.0.0",   // mode dropped from the exported signature
    "4.20.17", // last synthesized-mode era
    "5.0.0",   // two-argument access_ok
    "5.14.21", // last plain-printk kernel
    "5.15.0",  // _printk rename
    "6.8.0-41-generic",
];

/// Selectors that must fail, with the diagnostic the failure must name.
const MUST_FAIL: &[(&str, &str)] = &[
    ("3.9.11", "outside the supported range"),
    ("7.0.0", "outside the supported range"),
    ("fred", "unparseable kernel version selector"),
];

fn main() -> Result<()> {
    match env::args().nth(1).as_deref() {
        Some("build-matrix") => build_matrix(),
        Some(other) => bail!("unknown task {:?}; available: build-matrix", other),
        None => bail!("usage: cargo xtask build-matrix"),
    }
}

fn cargo_at(selector: &str, args: &[&str]) -> Result<Output> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());
    Command::new(cargo)
        .args(args)
        .args(["--target-dir", "target/xtask-matrix"])
        .env("KSHIM_KERNEL_VERSION", selector)
        .output()
        .with_context(|| format!("failed to spawn cargo for selector {:?}", selector))
}

fn build_matrix() -> Result<()> {
    // Tests, not just a check: the abi-test suite gates its expectations
    // on the compiled era, so each selector exercises its own variant.
    for selector in MUST_PASS_TESTS {
        let out = cargo_at(selector, &["test", "-p", "kshim-abi-test"])?;
        ensure!(
            out.status.success(),
            "selector {:?} must pass the abi tests, but failed:\n{}\n{}",
            selector,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
        println!("ok   {}", selector);
    }

    for (selector, diagnostic) in MUST_FAIL {
        let out = cargo_at(selector, &["check", "-p", "kshim-compat", "-p", "kshim-abi-test"])?;
        ensure!(
            !out.status.success(),
            "selector {:?} must fail the build, but succeeded",
            selector
        );
        let stderr = String::from_utf8_lossy(&out.stderr);
        ensure!(
            stderr.contains(diagnostic),
            "selector {:?} failed, but without naming {:?}:\n{}",
            selector,
            diagnostic,
            stderr
        );
        println!("ok   {} (rejected: {})", selector, diagnostic);
    }

    println!("build matrix passed");
    Ok(())
}
