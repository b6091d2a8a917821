//! Test harness around the compiled stub kernel.
//!
//! `build.rs` links a C stub providing every symbol the facade forwards to;
//! this crate declares the stub's observation API and a guard that
//! serializes tests touching its process-global state.

use std::sync::{Mutex, MutexGuard};

use kshim_ffi::{c_char, c_int, c_uint, TaskStruct};

extern "C" {
    pub fn stub_log_reset();
    pub fn stub_log_level() -> c_char;
    pub fn stub_log_precision() -> c_int;
    pub fn stub_log_bytes() -> *const u8;
    pub fn stub_log_copied() -> c_int;
    pub fn stub_log_calls() -> c_int;

    pub fn stub_access_ok_reset();
    pub fn stub_access_ok_last_mode() -> c_uint;
    pub fn stub_access_ok_calls() -> c_int;

    pub fn stub_rcu_reset();
    pub fn stub_rcu_depth() -> c_int;
    pub fn stub_rcu_enters() -> c_int;
    pub fn stub_rcu_exits() -> c_int;

    pub fn stub_task_ring() -> *mut TaskStruct;
    pub fn stub_task_lock_depth(p: *const TaskStruct) -> c_int;
    pub fn stub_task_id(p: *const TaskStruct) -> c_int;
}

/// Serialize access to the stub kernel's global state. Every test that
/// calls a facade function or reads stub counters must hold this.
pub fn stub_guard() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The payload bytes the stub logger captured from the last call.
pub fn log_bytes_captured() -> Vec<u8> {
    unsafe {
        let n = stub_log_copied() as usize;
        std::slice::from_raw_parts(stub_log_bytes(), n).to_vec()
    }
}
