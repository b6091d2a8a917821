//! RCU read-side critical-section markers
//!
//! `rcu_read_lock`/`rcu_read_unlock` are static inline in every kernel
//! config, so there is no symbol to bind; the kernel-side build provides
//! `*_helper` function forms and the facade forwards to those. Both are
//! synchronous, non-blocking markers; the facade adds no balance checking.
//! Callers must pair every enter with an exit, must not block while inside
//! a section, and may nest sections, exactly as with the underlying
//! primitives.

extern "C" {
    fn rcu_read_lock_helper();
    fn rcu_read_unlock_helper();
}

/// Enter a read-side critical section.
#[no_mangle]
pub extern "C" fn kshim_rcu_read_lock() {
    unsafe { rcu_read_lock_helper() }
}

/// Exit a read-side critical section.
#[no_mangle]
pub extern "C" fn kshim_rcu_read_unlock() {
    unsafe { rcu_read_unlock_helper() }
}
