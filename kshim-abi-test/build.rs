//! Builds the stub kernel the tests link against.
//!
//! The stub stands in for the black-box kernel primitives. It must be
//! compiled for the same version selector as the facade, so this script
//! includes the facade's version logic, resolves the selector the same way,
//! and hands the chosen eras to the C side as defines. It also re-emits the
//! era cfgs so the tests themselves can match the compiled variant.

use std::env;
use std::process::Command;

mod version {
    include!("../kshim-compat/src/version.rs");
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
    println!("cargo:rerun-if-changed=stub/kernel_stub.c");
    println!("cargo:rerun-if-changed=../kshim-compat/src/version.rs");
    println!("cargo:rerun-if-env-changed=KSHIM_KERNEL_VERSION");

    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_explicit_mode)");
    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_synth_mode)");
    println!("cargo:rustc-check-cfg=cfg(kshim_access_ok_two_arg)");
    println!("cargo:rustc-check-cfg=cfg(kshim_printk_renamed)");

    let release = env::var("KSHIM_KERNEL_VERSION")
        .ok()
        .or_else(uname_release)
        .unwrap_or_else(|| panic!("no kernel version selector: set KSHIM_KERNEL_VERSION"));

    let ver = KernelVersion::parse(&release)
        .unwrap_or_else(|| panic!("unparseable kernel version selector {:?}", release));

    if !supported(ver) {
        panic!(
            "kernel {}.{}.{} is outside the supported range",
            ver.major, ver.minor, ver.patch
        );
    }

    let era = access_ok_era(ver);
    match era {
        AccessOkEra::ExplicitMode => println!("cargo:rustc-cfg=kshim_access_ok_explicit_mode"),
        AccessOkEra::SynthesizedMode => println!("cargo:rustc-cfg=kshim_access_ok_synth_mode"),
        AccessOkEra::TwoArg => println!("cargo:rustc-cfg=kshim_access_ok_two_arg"),
    }

    let underscore = printk_symbol(ver) == PrintkSymbol::UnderscorePrintk;
    if underscore {
        println!("cargo:rustc-cfg=kshim_printk_renamed");
    }

    let arity = if era == AccessOkEra::TwoArg { "2" } else { "3" };

    cc::Build::new()
        .file("stub/kernel_stub.c")
        .define("STUB_ACCESS_OK_ARITY", Some(arity))
        .define(
            "STUB_PRINTK_UNDERSCORE",
            Some(if underscore { "1" } else { "0" }),
        )
        .warnings(true)
        .compile("kernel_stub");
}
