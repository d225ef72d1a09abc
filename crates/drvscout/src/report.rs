//! The three report sections, printed to stdout in a fixed order.
//!
//! Every section is a title, a header row, a rule line, and zero or more
//! data rows. Column widths match the header widths so the pipes line up;
//! the last column is unpadded.

use owo_colors::OwoColorize;
use tracing::warn;

use drvscout_common::kernel_log::KernelLog;
use drvscout_common::modules::{self, LoadedModule};
use drvscout_common::sysfs::{self, BoundDevice};
use drvscout_common::table;
use drvscout_common::urls::SearchUrls;

const ACTIVE_WIDTHS: &[usize] = &[22, 18, 65, 65, 45, 0];
const MODULE_WIDTHS: &[usize] = &[22, 10, 20, 65, 65, 0];
const BOOTLOG_WIDTHS: &[usize] = &[22, 65, 65, 45, 0];

/// Drivers currently bound to devices on the scanned buses.
pub fn active_drivers(log: &KernelLog) {
    println!("{}\n", "🐧️ Active Device Drivers (from /sys)".bold());

    let header = table::format_row(
        &[
            "Device",
            "Driver",
            "Patchwork Search",
            "GitHub Code Search",
            "Mailing List Search",
            "Relevant dmesg Log",
        ],
        ACTIVE_WIDTHS,
    );
    println!("{header}");
    println!("{}", table::separator(&header));

    for device in sysfs::active_drivers() {
        println!("{}", active_row(&device, log));
    }
}

/// Everything `lsmod` reports, one row per module.
pub fn loaded_modules() {
    println!("\n{}\n", "🐧️ All Loaded Kernel Modules (from lsmod)".bold());

    let header = table::format_row(
        &[
            "Module",
            "Size",
            "Used by",
            "Patchwork Search",
            "GitHub Code Search",
            "Mailing List Search",
        ],
        MODULE_WIDTHS,
    );
    println!("{header}");
    println!("{}", table::separator(&header));

    match modules::loaded_modules() {
        Ok(list) => {
            for module in &list {
                println!("{}", module_row(module));
            }
        }
        Err(err) => {
            warn!("module listing failed: {err}");
            println!("{}", "Could not execute the 'lsmod' command.".yellow());
        }
    }
}

/// Driver names mined from the captured boot log, sorted and filtered.
pub fn bootlog_drivers(log: &KernelLog) {
    println!("\n{}\n", "🐧️ Drivers from dmesg Log (Unique, Filtered)".bold());

    let header = table::format_row(
        &[
            "Detected Driver",
            "Patchwork Search",
            "GitHub Code Search",
            "Mailing List Search",
            "Relevant dmesg Log",
        ],
        BOOTLOG_WIDTHS,
    );
    println!("{header}");
    println!("{}", table::separator(&header));

    for driver in log.driver_candidates() {
        println!("{}", bootlog_row(&driver, log));
    }
}

fn active_row(device: &BoundDevice, log: &KernelLog) -> String {
    let urls = SearchUrls::for_name(&device.driver);
    let excerpt = log.relevant_line(&device.driver);
    table::format_row(
        &[
            device.device.as_str(),
            device.driver.as_str(),
            urls.patchwork.as_str(),
            urls.github.as_str(),
            urls.lkml.as_str(),
            excerpt.as_str(),
        ],
        ACTIVE_WIDTHS,
    )
}

fn module_row(module: &LoadedModule) -> String {
    let urls = SearchUrls::for_name(&module.name);
    let size = module.size.to_string();
    let used_by = module.used_by_display();
    table::format_row(
        &[
            module.name.as_str(),
            size.as_str(),
            used_by.as_str(),
            urls.patchwork.as_str(),
            urls.github.as_str(),
            urls.lkml.as_str(),
        ],
        MODULE_WIDTHS,
    )
}

fn bootlog_row(driver: &str, log: &KernelLog) -> String {
    let urls = SearchUrls::for_name(driver);
    let excerpt = log.relevant_line(driver);
    table::format_row(
        &[
            driver,
            urls.patchwork.as_str(),
            urls.github.as_str(),
            urls.lkml.as_str(),
            excerpt.as_str(),
        ],
        BOOTLOG_WIDTHS,
    )
}
