//! Kernel boot log capture and driver-name extraction.
//!
//! Sources:
//! - `dmesg -k` - kernel-only ring buffer, captured once per run
//!
//! The captured lines are shared read-only by the active-driver report
//! (log annotation) and the boot-log report (candidate extraction), so the
//! command is never re-run per driver.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::exec::{self, ExecError};

/// Longest log excerpt printed in a table cell, ellipsis included.
pub const LOG_EXCERPT_MAX_WIDTH: usize = 55;

/// Kernel subsystems that flood the boot log but are not board drivers.
/// Sorted; membership is checked with `binary_search` on the lowercased name.
const NOISE_BLOCKLIST: &[&str] = &[
    "acpi",
    "alternatives",
    "apparmor",
    "audit",
    "blacklist",
    "cacheinfo",
    "cma",
    "console",
    "device-mapper",
    "devtmpfs",
    "dma",
    "dmi",
    "drop_monitor",
    "efi",
    "efivars",
    "evm",
    "ftrace",
    "fuse",
    "gic",
    "gicv3",
    "hrtimer",
    "hugetlb",
    "hw-breakpoint",
    "ima",
    "input",
    "integrity",
    "iommu",
    "its",
    "kauditd_printk_skb",
    "kernel",
    "landlock",
    "lr",
    "lsm",
    "mce",
    "memory",
    "microcode",
    "net",
    "netlabel",
    "nr_irqs",
    "numa",
    "pc",
    "pcpu-alloc",
    "percpu",
    "pid_max",
    "pm",
    "pnp",
    "printk",
    "psci",
    "pstore",
    "random",
    "rcu",
    "sched_clock",
    "scsi",
    "sdei",
    "secureboot",
    "serial",
    "slub",
    "smccc",
    "smp",
    "sp",
    "squashfs",
    "sve",
    "systemd",
    "tainted",
    "tcp",
    "thermal_sys",
    "vfs",
    "warning",
    "workingset",
    "yama",
];

/// `[   12.345678] name: rest` - the shape a candidate line must have.
static LOG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*\d+\.\d+\]\s*([^:]+):").unwrap());

/// Leading `[   12.345678] ` timestamp, stripped from excerpts.
static TIMESTAMP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*\d+\.\d+\]\s*").unwrap());

/// Per-CPU / loop-device / x86-feature index names (`CPU0`, `loop3`, `x2`).
static INDEX_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:CPU|loop|x)\d*$").unwrap());

/// NVMe namespace block devices (`nvme0n1`); `nvme_core` must survive.
static NVME_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^nvme\d+n\d+$").unwrap());

/// One immutable snapshot of the kernel ring buffer.
#[derive(Debug, Clone, Default)]
pub struct KernelLog {
    lines: Vec<String>,
}

impl KernelLog {
    /// Capture `dmesg -k` once. Callers decide how to degrade on failure;
    /// an empty log is a valid snapshot, not an error.
    pub fn capture() -> Result<Self, ExecError> {
        let stdout = exec::capture_stdout("dmesg", &["-k"])?;
        Ok(Self::from_lines(stdout.lines()))
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// First log line mentioning `driver_name`, cleaned for display.
    ///
    /// A line matches if it contains ` name: ` or `[name]`; names with
    /// underscores are also tried with hyphens, since drivers register
    /// under either spelling. The match is returned with the timestamp
    /// prefix stripped, trimmed, and cut to [`LOG_EXCERPT_MAX_WIDTH`].
    /// Returns the empty string when nothing matches.
    pub fn relevant_line(&self, driver_name: &str) -> String {
        let mut patterns = vec![format!(" {driver_name}: "), format!("[{driver_name}]")];
        if driver_name.contains('_') {
            let hyphenated = driver_name.replace('_', "-");
            patterns.push(format!(" {hyphenated}: "));
            patterns.push(format!("[{hyphenated}]"));
        }

        for line in &self.lines {
            if patterns.iter().any(|pattern| line.contains(pattern.as_str())) {
                return trim_excerpt(line);
            }
        }

        String::new()
    }

    /// Unique driver names detected in the log, lexically sorted.
    ///
    /// Every line shaped like `[ts] token: ...` contributes its leading
    /// token (any `@address` suffix dropped); tokens that are empty,
    /// contain whitespace, are purely numeric, sit on the noise blocklist,
    /// or look like per-index device names are discarded.
    pub fn driver_candidates(&self) -> Vec<String> {
        let mut found = HashSet::new();
        for line in &self.lines {
            if let Some(name) = candidate_from_line(line) {
                found.insert(name);
            }
        }

        let mut names: Vec<String> = found.into_iter().collect();
        names.sort();
        debug!(
            "{} driver candidates in {} log lines",
            names.len(),
            self.lines.len()
        );
        names
    }
}

/// Strip the timestamp, trim, and enforce the excerpt width.
fn trim_excerpt(line: &str) -> String {
    let cleaned = TIMESTAMP_PREFIX.replace(line, "");
    let cleaned = cleaned.trim();
    if cleaned.chars().count() > LOG_EXCERPT_MAX_WIDTH {
        let head: String = cleaned.chars().take(LOG_EXCERPT_MAX_WIDTH - 3).collect();
        return format!("{head}...");
    }
    cleaned.to_string()
}

fn candidate_from_line(line: &str) -> Option<String> {
    let caps = LOG_LINE.captures(line)?;
    let raw = caps.get(1)?.as_str().trim();
    let name = raw.split('@').next().unwrap_or(raw);

    if name.is_empty()
        || name.chars().any(char::is_whitespace)
        || name.chars().all(|c| c.is_ascii_digit())
        || is_noise(name)
    {
        return None;
    }

    Some(name.to_string())
}

fn is_noise(name: &str) -> bool {
    let lower = name.to_lowercase();
    NOISE_BLOCKLIST.binary_search(&lower.as_str()).is_ok()
        || INDEX_NAME.is_match(name)
        || NVME_NAMESPACE.is_match(name)
}
