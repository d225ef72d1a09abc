//! drvscout common - probing and formatting shared by the drvscout CLI
//!
//! Everything here is read-only against the host: sysfs symlink walks and
//! two captured commands (`dmesg -k`, `lsmod`). No state survives a run.

pub mod exec;
pub mod kernel_log;
pub mod modules;
pub mod privilege;
pub mod sysfs;
pub mod table;
pub mod urls;

pub use exec::ExecError;
pub use kernel_log::KernelLog;
pub use modules::LoadedModule;
pub use sysfs::BoundDevice;
pub use urls::SearchUrls;
