//! Stable logging entry points
//!
//! `printk` takes its severity as a `KERN_SOH` byte pair glued onto the
//! format string by macros, which no foreign caller can expand. The facade
//! bakes the two severities the callers need (informational, continuation)
//! into fixed `"%.*s"` format strings, so the payload is counted: length is
//! authoritative and embedded NUL bytes travel with the buffer.
//!
//! The entry point itself was renamed `_printk` in 5.15; the rename is a
//! build-time selection, the exported symbols do not change.

use kshim_ffi::{c_char, c_int};

#[cfg(not(kshim_printk_renamed))]
extern "C" {
    fn printk(fmt: *const c_char, ...) -> c_int;
}

#[cfg(kshim_printk_renamed)]
extern "C" {
    fn _printk(fmt: *const c_char, ...) -> c_int;
}

// KERN_SOH level prefixes from include/linux/kern_levels.h.
const KERN_INFO_FMT: &[u8] = b"\x016%.*s\0";
const KERN_CONT_FMT: &[u8] = b"\x01c%.*s\0";

#[cfg(not(kshim_printk_renamed))]
#[inline]
unsafe fn log(fmt: &'static [u8], buf: *const u8, len: c_int) -> c_int {
    printk(fmt.as_ptr() as *const c_char, len, buf)
}

#[cfg(kshim_printk_renamed)]
#[inline]
unsafe fn log(fmt: &'static [u8], buf: *const u8, len: c_int) -> c_int {
    _printk(fmt.as_ptr() as *const c_char, len, buf)
}

/// Log `len` bytes of `buf` at informational severity.
///
/// Returns the logger's status unchanged.
///
/// # Safety
///
/// `buf` must be valid for reads of `len` bytes for the duration of the
/// call. No NUL terminator is required or honored.
#[no_mangle]
pub unsafe extern "C" fn kshim_printk_info(buf: *const u8, len: c_int) -> c_int {
    log(KERN_INFO_FMT, buf, len)
}

/// Log `len` bytes of `buf` as a continuation of the previous line.
///
/// Returns the logger's status unchanged.
///
/// # Safety
///
/// `buf` must be valid for reads of `len` bytes for the duration of the
/// call. No NUL terminator is required or honored.
#[no_mangle]
pub unsafe extern "C" fn kshim_printk_cont(buf: *const u8, len: c_int) -> c_int {
    log(KERN_CONT_FMT, buf, len)
}
