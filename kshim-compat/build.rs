//! Build-time version selection for the facade.
//!
//! Resolves the target kernel version (env selector, then `uname -r`),
//! refuses anything outside the supported range, and turns the era
//! predicates into cfg flags. Exactly one body per primitive compiles; an
//! unmatched target is a build failure here, never a runtime branch.

use std::env;
use std::process::Command;

mod version {
    include!("src/version.rs");
}

use version::{access_ok_era, printk_symbol, supported, AccessOkEra, KernelVersion, PrintkSymbol};

fn uname_release() -> Option<String> {
    let out = Command::new("uname").arg("-r").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let release = String::from_utf8(out.stdout).ok()?;
    let release = release.trim();
    if release.is_empty() {
        None
    } else {
        Some(release.to_owned())
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/version.rs");
    println!("cargo:rerun-if-env-changed=KSHIM_KERNEL_VERSION");

    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_explicit_mode)");
    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_synth_mode)");
    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_two_arg)");
    println!("cargo:rustc-check-cfg=cfg(kshim_printk_renamed)");

    let release = match env::var("KSHIM_KERNEL_VERSION") {
        Ok(v) => v,
        Err(_) => uname_release().unwrap_or_else(|| {
            panic!(
                "no kernel version selector: set KSHIM_KERNEL_VERSION \
                 (e.g. KSHIM_KERNEL_VERSION=5.15.0) or build on a host \
                 where `uname -r` works"
            )
        }),
    };

    let ver = KernelVersion::parse(&release).unwrap_or_else(|| {
        panic!(
            "unparseable kernel version selector {:?}: expected a release \
             string like 5.15.0 or 6.8.0-41-generic",
            release
        )
    });

    if !supported(ver) {
        panic!(
            "kernel {}.{}.{} is outside the supported range [{}.{}.{}, {}.{}.{}): \
             no facade variant exists for it",
            ver.major,
            ver.minor,
            ver.patch,
            version::MIN_SUPPORTED.major,
            version::MIN_SUPPORTED.minor,
            version::MIN_SUPPORTED.patch,
            version::MAX_SUPPORTED_EXCLUSIVE.major,
            version::MAX_SUPPORTED_EXCLUSIVE.minor,
            version::MAX_SUPPORTED_EXCLUSIVE.patch,
        );
    }

    match access_ok_era(ver) {
        AccessOkEra::ExplicitMode => println!("cargo:rustc-cfg=kshim_access_ok_explicit_mode"),
        AccessOkEra::SynthesizedMode => println!("cargo:rustc-cfg=kshim_access_ok_synth_mode"),
        AccessOkEra::TwoArg => println!("cargo:rustc-cfg=kshim_access_ok_two_arg"),
    }

    if printk_symbol(ver) == PrintkSymbol::UnderscorePrintk {
        println!("cargo:rustc-cfg=kshim_printk_renamed");
    }
}
