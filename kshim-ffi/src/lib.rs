//! Foundational FFI types for the kshim kernel facade
//!
//! This crate provides the scalar types, handles, and errno machinery shared
//! by the facade crate and its ABI test harness. Everything here mirrors a
//! Linux kernel ABI detail exactly; layout is pinned by compile-time
//! assertions and re-checked by the abi-test crate.

#![cfg_attr(not(test), no_std)]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

#[cfg(not(test))]
use core::ffi::c_void;

#[cfg(test)]
use std::ffi::c_void;

use static_assertions::assert_eq_size;

pub use libc::{c_char, c_int, c_long, c_uint, c_ulong, size_t, uintptr_t};

/// Kernel pointer type (matches C void*)
pub type KernelPtr = *mut c_void;

/// Opaque handle to a kernel `struct task_struct`.
///
/// The facade never reads or writes through this type; it only carries the
/// pointer between the caller and the kernel-side primitives. Non-owning:
/// lifetime and locking discipline are the kernel's.
#[repr(C)]
pub struct TaskStruct {
    _data: [u8; 0],
    _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
}

/// Largest errno magnitude the kernel encodes into a pointer
/// (from include/linux/err.h).
pub const MAX_ERRNO: c_ulong = 4095;

/// Access-mode values for the pre-5.0 `access_ok` form
/// (from the old include/asm-generic/uaccess.h).
pub const VERIFY_READ: c_uint = 0;
pub const VERIFY_WRITE: c_uint = 1;

/// Error codes matching Linux kernel errno values
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KernelError {
    EPERM = 1,
    ENOENT = 2,
    EINTR = 4,
    EIO = 5,
    EAGAIN = 11,
    ENOMEM = 12,
    EACCES = 13,
    EFAULT = 14,
    EBUSY = 16,
    EEXIST = 17,
    EINVAL = 22,
    ENOSPC = 28,
}

impl KernelError {
    /// Negative errno form, as kernel interfaces return it
    pub fn to_errno(self) -> c_int {
        -(self as c_int)
    }

    /// Decode a negative errno into a `KernelError`.
    ///
    /// Returns `None` for zero, positive values, and magnitudes this layer
    /// does not name.
    pub fn from_errno(errno: c_int) -> Option<Self> {
        match errno {
            -1 => Some(KernelError::EPERM),
            -2 => Some(KernelError::ENOENT),
            -4 => Some(KernelError::EINTR),
            -5 => Some(KernelError::EIO),
            -11 => Some(KernelError::EAGAIN),
            -12 => Some(KernelError::ENOMEM),
            -13 => Some(KernelError::EACCES),
            -14 => Some(KernelError::EFAULT),
            -16 => Some(KernelError::EBUSY),
            -17 => Some(KernelError::EEXIST),
            -22 => Some(KernelError::EINVAL),
            -28 => Some(KernelError::ENOSPC),
            _ => None,
        }
    }
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Convert a Result to Linux errno format
///
/// - Ok(value) => 0
/// - Err(error) => negative errno
pub fn result_to_errno<T>(result: KernelResult<T>) -> c_int {
    match result {
        Ok(_) => 0,
        Err(e) => e.to_errno(),
    }
}

/// Convert errno to Result
///
/// - 0 => Ok(())
/// - negative => Err(KernelError)
/// - positive or unknown magnitude => Err(EINVAL)
pub fn errno_to_result(errno: c_int) -> KernelResult<()> {
    if errno == 0 {
        Ok(())
    } else if errno > 0 {
        Err(KernelError::EINVAL)
    } else {
        Err(KernelError::from_errno(errno).unwrap_or(KernelError::EINVAL))
    }
}

// ABI pins for everything the facade's casts rely on
assert_eq_size!(KernelError, i32);
assert_eq_size!(KernelPtr, uintptr_t);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_error_errno() {
        assert_eq!(KernelError::ENOMEM.to_errno(), -12);
        assert_eq!(KernelError::EINVAL.to_errno(), -22);
        assert_eq!(KernelError::EFAULT.to_errno(), -14);
    }

    #[test]
    fn test_from_errno() {
        assert_eq!(KernelError::from_errno(-14), Some(KernelError::EFAULT));
        assert_eq!(KernelError::from_errno(0), None);
        assert_eq!(KernelError::from_errno(-4000), None);
    }

    #[test]
    fn test_result_to_errno() {
        assert_eq!(result_to_errno(Ok::<(), _>(())), 0);
        assert_eq!(result_to_errno(Err::<(), _>(KernelError::ENOMEM)), -12);
    }

    #[test]
    fn test_errno_to_result() {
        assert!(errno_to_result(0).is_ok());
        assert_eq!(errno_to_result(-12), Err(KernelError::ENOMEM));
        assert_eq!(errno_to_result(7), Err(KernelError::EINVAL));
    }

    #[test]
    fn test_round_trip() {
        let errors = [
            KernelError::EPERM,
            KernelError::ENOENT,
            KernelError::EFAULT,
            KernelError::EINVAL,
        ];

        for error in &errors {
            let errno = error.to_errno();
            assert_eq!(errno_to_result(errno), Err(*error));
        }
    }

    #[test]
    fn test_access_modes() {
        assert_eq!(VERIFY_READ, 0);
        assert_eq!(VERIFY_WRITE, 1);
    }

    #[test]
    fn test_task_struct_is_zero_sized_handle() {
        assert_eq!(core::mem::size_of::<TaskStruct>(), 0);
    }
}
