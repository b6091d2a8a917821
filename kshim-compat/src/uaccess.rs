//! User-pointer range validation
//!
//! `access_ok` is the churniest primitive this facade covers. Three eras
//! exist (see [`crate::version::AccessOkEra`]):
//!
//! - below 4.0.0 the mode argument is semantically consulted, so the
//!   exported signature carries it and forwards it verbatim;
//! - in [4.0.0, 5.0.0) the underlying form still takes three arguments but
//!   ignores the mode, so the export drops it and a fixed 0 is synthesized
//!   internally;
//! - from 5.0.0 both sides use the two-argument form.
//!
//! The eras are deliberately kept as separate version-gated definitions
//! rather than collapsed into one "best" signature; the churn is genuine
//! upstream history and callers on mode-consulting kernels must say which
//! direction they mean.
//!
//! Result is boolean-like: nonzero when the range is accessible, zero
//! otherwise. Never an errno.

use core::ffi::c_void;
use kshim_ffi::{c_int, c_ulong};

#[cfg(kshim_access_ok_explicit_mode)]
pub use kshim_ffi::{VERIFY_READ, VERIFY_WRITE};

#[cfg(any(kshim_access_ok_explicit_mode, kshim_access_ok_synth_mode))]
extern "C" {
    fn access_ok_helper(
        mode: kshim_ffi::c_uint,
        addr: *const c_void,
        n: c_ulong,
    ) -> c_int;
}

#[cfg(kshim_access_ok_two_arg)]
extern "C" {
    fn access_ok_helper(addr: *const c_void, n: c_ulong) -> c_int;
}

/// Check that a user-space range of `n` bytes at `addr` is accessible for
/// `mode` (`VERIFY_READ` or `VERIFY_WRITE`). Nonzero if accessible.
///
/// # Safety
///
/// Forwards to the kernel's check unvalidated; `addr`/`n` carry no
/// requirements of their own here, but the call must happen in a context
/// where the kernel's own check is legal (process context).
#[cfg(kshim_access_ok_explicit_mode)]
#[no_mangle]
pub unsafe extern "C" fn kshim_access_ok(
    mode: kshim_ffi::c_uint,
    addr: *const c_void,
    n: c_ulong,
) -> c_int {
    access_ok_helper(mode, addr, n)
}

/// Check that a user-space range of `n` bytes at `addr` is accessible.
/// Nonzero if accessible.
///
/// # Safety
///
/// Forwards to the kernel's check unvalidated; the call must happen in a
/// context where the kernel's own check is legal (process context).
#[cfg(kshim_access_ok_synth_mode)]
#[no_mangle]
pub unsafe extern "C" fn kshim_access_ok(addr: *const c_void, n: c_ulong) -> c_int {
    // The underlying form still takes a mode but no longer consults it.
    access_ok_helper(0, addr, n)
}

/// Check that a user-space range of `n` bytes at `addr` is accessible.
/// Nonzero if accessible.
///
/// # Safety
///
/// Forwards to the kernel's check unvalidated; the call must happen in a
/// context where the kernel's own check is legal (process context).
#[cfg(kshim_access_ok_two_arg)]
#[no_mangle]
pub unsafe extern "C" fn kshim_access_ok(addr: *const c_void, n: c_ulong) -> c_int {
    access_ok_helper(addr, n)
}
