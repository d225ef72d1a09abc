//! drvscout - enumerate kernel drivers and modules with upstream search links.
//!
//! Walks the sysfs bus tree, lists loaded modules, and mines the boot log
//! for driver names, printing one table per source with ready-to-open
//! search URLs for each driver.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{debug, warn};

use drvscout::report;
use drvscout_common::kernel_log::KernelLog;
use drvscout_common::privilege;

#[derive(Parser)]
#[command(name = "drvscout")]
#[command(version)]
#[command(
    about = "Enumerate active kernel drivers, loaded modules, and boot-log driver mentions, \
             with upstream search links for each name",
    long_about = None
)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    // Reading the kernel ring buffer needs root on most distributions.
    if !privilege::is_root() {
        println!("{}", "🛑 This tool requires root privileges.".red().bold());
        println!("   Please run with sudo to read 'dmesg' logs for complete information.");
        println!("   Example: sudo drvscout");
        std::process::exit(1);
    }

    // One snapshot, shared by the active-driver and boot-log sections.
    let log = match KernelLog::capture() {
        Ok(log) => log,
        Err(err) => {
            warn!("kernel log capture failed: {err}");
            println!(
                "{}",
                "Warning: Could not run 'dmesg'. Log output will be unavailable.".yellow()
            );
            KernelLog::default()
        }
    };
    debug!("captured {} kernel log lines", log.line_count());

    report::active_drivers(&log);
    report::loaded_modules();
    report::bootlog_drivers(&log);

    Ok(())
}
