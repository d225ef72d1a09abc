//! Active device drivers discovered from the sysfs bus tree.
//!
//! Each scanned bus exposes `/sys/bus/<bus>/devices/<dev>/driver`, a symlink
//! into the driver registry when a driver is bound. The scan walks the buses
//! in a fixed order and reports each driver once, keyed on the first device
//! seen using it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

/// Buses scanned for bound devices, in report order.
pub const BUS_TYPES: &[&str] = &["pci", "usb", "platform", "i2c", "spi"];

const SYSFS_BUS_ROOT: &str = "/sys/bus";

/// A device entry whose `driver` symlink resolved to a driver name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundDevice {
    /// Directory name of the device entry, e.g. `0000:00:02.0`.
    pub device: String,
    /// Final component of the resolved `driver` symlink, e.g. `i915`.
    pub driver: String,
}

/// Scan `/sys/bus` and return one entry per unique driver.
///
/// Buses missing a `devices` directory are skipped silently, as are devices
/// with nothing bound. Entries keep discovery order: bus by bus as listed in
/// [`BUS_TYPES`], devices in directory-iteration order within each bus.
pub fn active_drivers() -> Vec<BoundDevice> {
    scan_bus_tree(Path::new(SYSFS_BUS_ROOT))
}

fn scan_bus_tree(bus_root: &Path) -> Vec<BoundDevice> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut bound = Vec::new();

    for bus in BUS_TYPES {
        let devices_dir = bus_root.join(bus).join("devices");
        let entries = match fs::read_dir(&devices_dir) {
            Ok(entries) => entries,
            Err(_) => {
                debug!("no {bus} bus on this machine, skipping");
                continue;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let Some(driver) = driver_of(&entry.path()) else {
                continue;
            };
            if !seen.insert(driver.clone()) {
                continue; // one row per driver, first device wins
            }
            bound.push(BoundDevice {
                device: entry.file_name().to_string_lossy().into_owned(),
                driver,
            });
        }
    }

    bound
}

/// Name of the driver bound to the device directory, if any.
///
/// The `driver` entry is a symlink into the bus driver registry; a missing
/// or dangling link both mean nothing is bound.
pub fn driver_of(device_dir: &Path) -> Option<String> {
    let link = device_dir.join("driver");
    let target = fs::read_link(&link).ok()?;
    if !link.exists() {
        return None;
    }
    Some(target.file_name()?.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Build `<root>/<bus>/devices/<device>`, optionally binding `driver`
    /// through a relative symlink into `<root>/<bus>/drivers/`.
    fn add_device(root: &Path, bus: &str, device: &str, driver: Option<&str>) -> PathBuf {
        let device_dir = root.join(bus).join("devices").join(device);
        fs::create_dir_all(&device_dir).unwrap();
        if let Some(driver) = driver {
            fs::create_dir_all(root.join(bus).join("drivers").join(driver)).unwrap();
            symlink(
                format!("../../drivers/{driver}"),
                device_dir.join("driver"),
            )
            .unwrap();
        }
        device_dir
    }

    #[test]
    fn resolves_bound_driver_name() {
        let root = TempDir::new().unwrap();
        let device_dir = add_device(root.path(), "pci", "0000:00:02.0", Some("i915"));
        assert_eq!(driver_of(&device_dir), Some("i915".to_string()));
    }

    #[test]
    fn unbound_device_has_no_driver() {
        let root = TempDir::new().unwrap();
        let device_dir = add_device(root.path(), "pci", "0000:00:1f.0", None);
        assert_eq!(driver_of(&device_dir), None);
    }

    #[test]
    fn dangling_driver_link_counts_as_unbound() {
        let root = TempDir::new().unwrap();
        let device_dir = add_device(root.path(), "usb", "1-1", None);
        symlink("../../drivers/ghost", device_dir.join("driver")).unwrap();
        assert_eq!(driver_of(&device_dir), None);
    }

    #[test]
    fn devices_sharing_a_driver_produce_one_entry() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "usb", "1-1", Some("usbhid"));
        add_device(root.path(), "usb", "1-2", Some("usbhid"));

        let bound = scan_bus_tree(root.path());
        assert_eq!(bound.len(), 1);
        assert_eq!(bound[0].driver, "usbhid");
        assert!(bound[0].device == "1-1" || bound[0].device == "1-2");
    }

    #[test]
    fn buses_are_scanned_in_fixed_order() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "usb", "1-1", Some("btusb"));
        add_device(root.path(), "pci", "0000:00:1f.3", Some("ahci"));

        let drivers: Vec<String> = scan_bus_tree(root.path())
            .into_iter()
            .map(|b| b.driver)
            .collect();
        assert_eq!(drivers, vec!["ahci".to_string(), "btusb".to_string()]);
    }

    #[test]
    fn missing_buses_are_skipped_silently() {
        let root = TempDir::new().unwrap();
        add_device(root.path(), "i2c", "0-0050", Some("at24"));

        let bound = scan_bus_tree(root.path());
        assert_eq!(bound.len(), 1);
        assert_eq!(bound[0].device, "0-0050");
    }
}
