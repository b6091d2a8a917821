//! Error-pointer decoding
//!
//! The kernel encodes errno values into the top `MAX_ERRNO` addresses of
//! the pointer space (include/linux/err.h): errno `-e` travels as the
//! unsigned pointer value `2^w - e`. `IS_ERR`/`PTR_ERR` are inline and
//! cannot be bound across the FFI boundary, but the encoding itself is
//! stable ABI across every supported kernel, so these two are implemented
//! natively rather than forwarded. One era each.

use core::ffi::c_void;
use kshim_ffi::{c_int, c_long, c_ulong, MAX_ERRNO};

/// Nonzero when `ptr` is an encoded errno rather than a valid address.
#[no_mangle]
pub extern "C" fn kshim_is_err(ptr: *const c_void) -> c_int {
    (ptr as usize as c_ulong >= MAX_ERRNO.wrapping_neg()) as c_int
}

/// The negative errno encoded in `ptr`.
///
/// Only meaningful after [`kshim_is_err`] returned nonzero for the same
/// pointer; the result for a valid pointer is unspecified, exactly as with
/// the underlying `PTR_ERR`.
#[no_mangle]
pub extern "C" fn kshim_ptr_err(ptr: *const c_void) -> c_long {
    ptr as usize as c_long
}
