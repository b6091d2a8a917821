//! Task-list traversal and per-task locking
//!
//! `next_task` and `task_lock`/`task_unlock` are macro/inline constructs in
//! linux/sched.h; the kernel-side build provides `*_helper` function forms.
//! Task handles are opaque and non-owning: the facade never dereferences
//! them, never extends their lifetime, and acquires no lock of its own.

use kshim_ffi::TaskStruct;

extern "C" {
    fn next_task_helper(p: *mut TaskStruct) -> *mut TaskStruct;
    fn task_lock_helper(p: *mut TaskStruct);
    fn task_unlock_helper(p: *mut TaskStruct);
}

/// Advance to the next task in the kernel's global task list.
///
/// The returned handle is non-owning and only valid under the same lock.
///
/// # Safety
///
/// `p` must be a live task handle, and the caller must already hold the
/// lock the kernel requires for list traversal (an RCU read section).
#[no_mangle]
pub unsafe extern "C" fn kshim_next_task(p: *mut TaskStruct) -> *mut TaskStruct {
    next_task_helper(p)
}

/// Acquire the per-task lock. Must be paired with [`kshim_task_unlock`].
///
/// Blocking semantics are the underlying primitive's; none are added here.
///
/// # Safety
///
/// `p` must be a live task handle.
#[no_mangle]
pub unsafe extern "C" fn kshim_task_lock(p: *mut TaskStruct) {
    task_lock_helper(p)
}

/// Release the per-task lock taken by [`kshim_task_lock`].
///
/// # Safety
///
/// `p` must be a live task handle whose lock the caller holds.
#[no_mangle]
pub unsafe extern "C" fn kshim_task_unlock(p: *mut TaskStruct) {
    task_unlock_helper(p)
}
