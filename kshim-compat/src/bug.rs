//! Fatal-abort entry point
//!
//! `BUG()` is a macro that expands to an architecture-specific trap; it has
//! no symbol of its own. The kernel-side build provides a `bug_helper`
//! function form, and the facade re-exports it with a never-returning type
//! so callers and their type systems know control does not come back.

extern "C" {
    fn bug_helper() -> !;
}

/// Unconditionally trigger a fatal kernel bug condition.
///
/// Never returns; the calling context is terminated by the kernel.
#[no_mangle]
pub extern "C" fn kshim_bug() -> ! {
    unsafe { bug_helper() }
}
