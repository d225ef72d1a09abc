//! Effective-UID check.
//!
//! Reading the kernel ring buffer needs root on most distributions
//! (`kernel.dmesg_restrict=1`), so the CLI refuses to start without it.

/// Check if we're running as root.
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}
