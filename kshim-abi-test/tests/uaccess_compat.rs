//! User-range check facade against the stub kernel.
//!
//! The exported signature differs per era, so the era tests are gated on
//! the same cfgs the facade was built with. Every variant must agree on
//! the boolean contract: zero for a null address, nonzero for a live range.

use core::ffi::c_void;
use core::ptr;

use kshim_abi_test::*;
use kshim_compat::uaccess::kshim_access_ok;
use kshim_ffi::c_ulong;

#[cfg(kshim_access_ok_explicit_mode)]
use kshim_compat::uaccess::{VERIFY_READ, VERIFY_WRITE};

#[cfg(kshim_access_ok_explicit_mode)]
#[test]
fn test_null_address_is_inaccessible() {
    let _guard = stub_guard();
    unsafe {
        stub_access_ok_reset();
        assert_eq!(kshim_access_ok(VERIFY_READ, ptr::null(), 16), 0);
    }
}

#[cfg(not(kshim_access_ok_explicit_mode))]
#[test]
fn test_null_address_is_inaccessible() {
    let _guard = stub_guard();
    unsafe {
        stub_access_ok_reset();
        assert_eq!(kshim_access_ok(ptr::null(), 16), 0);
    }
}

#[cfg(kshim_access_ok_explicit_mode)]
#[test]
fn test_live_range_is_accessible() {
    let _guard = stub_guard();
    let buf = [0u8; 64];
    unsafe {
        stub_access_ok_reset();
        let ok = kshim_access_ok(
            VERIFY_WRITE,
            buf.as_ptr() as *const c_void,
            buf.len() as c_ulong,
        );
        assert_ne!(ok, 0);
        // Mode is semantically consulted in this era and must arrive verbatim.
        assert_eq!(stub_access_ok_last_mode(), VERIFY_WRITE);
        assert_eq!(stub_access_ok_calls(), 1);
    }
}

#[cfg(not(kshim_access_ok_explicit_mode))]
#[test]
fn test_live_range_is_accessible() {
    let _guard = stub_guard();
    let buf = [0u8; 64];
    unsafe {
        stub_access_ok_reset();
        let ok = kshim_access_ok(buf.as_ptr() as *const c_void, buf.len() as c_ulong);
        assert_ne!(ok, 0);
        assert_eq!(stub_access_ok_calls(), 1);
    }
}

// In the synthesized-mode era the underlying form still takes three
// arguments; the facade must fill the dropped mode with a fixed 0.
#[cfg(kshim_access_ok_synth_mode)]
#[test]
fn test_dropped_mode_is_synthesized_as_zero() {
    let _guard = stub_guard();
    let buf = [0u8; 8];
    unsafe {
        stub_access_ok_reset();
        kshim_access_ok(buf.as_ptr() as *const c_void, buf.len() as c_ulong);
        assert_eq!(stub_access_ok_last_mode(), 0);
    }
}
