//! Version-normalized kernel primitive facade
//!
//! The kernel's logging, BUG, user-range-check, error-pointer, RCU, and
//! task-list primitives are macros or inline functions, and several of them
//! changed signature across releases. An external caller that can only bind
//! real symbols with a stable calling convention cannot reach them directly.
//! This crate exports one non-inline `kshim_*` function per primitive with a
//! signature that is fixed per build, and forwards to whichever underlying
//! form the target kernel actually has.
//!
//! # Architecture
//!
//! ```text
//! External caller (stable symbol bindings)
//!      |
//! kshim-compat (this crate) - version dispatch + signature normalization
//!      |
//! Kernel primitives - exported symbols, plus *_helper function forms that
//!                     the kernel-side build provides for macro-only ones
//! ```
//!
//! Version selection happens entirely in `build.rs`: the target kernel
//! version (from `KSHIM_KERNEL_VERSION`, falling back to `uname -r`) is
//! checked against the thresholds in [`version`] and exactly one body per
//! primitive is compiled in. There is no runtime dispatch, no runtime error
//! path, and no state. Pairing contracts (RCU enter/exit, task lock/unlock)
//! are the caller's to uphold; this layer neither checks nor enforces them.

#![cfg_attr(not(test), no_std)]

use static_assertions::assert_eq_size;

pub mod bug;
pub mod err_ptr;
pub mod printk;
pub mod rcu;
pub mod sched;
pub mod uaccess;
/// Kernel version model and era predicates, shared with the build scripts.
pub mod version;

// Platform guard: the error-pointer casts and the counted-buffer lengths
// assume object sizes and pointers share one word width. A target where
// size_t and uintptr_t diverge must not build.
assert_eq_size!(libc::size_t, libc::uintptr_t);
assert_eq_size!(usize, libc::size_t);
