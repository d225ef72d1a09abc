//! End-to-end driver discovery over a synthetic boot log.
//!
//! Feeds a realistic dmesg capture through candidate extraction, then checks
//! that every surviving name gets a log excerpt and verbatim search URLs.

use drvscout_common::kernel_log::KernelLog;
use drvscout_common::urls::SearchUrls;

fn synthetic_boot_log() -> KernelLog {
    KernelLog::from_lines([
        "[    0.000000] Linux version 6.8.0-35-generic (buildd@lcy02-amd64-080)",
        "[    0.050000] ACPI: Early table checksum verification disabled",
        "[    0.100000] smp: Bringing up secondary CPUs ...",
        "[    0.200000] CPU3: Booted secondary processor",
        "[    1.100000] pci 0000:00:02.0: vgaarb: setting as boot VGA device",
        "[    2.000000] zram: Added device: zram0",
        "[    2.500000] e1000e: Intel(R) PRO/1000 Network Driver",
        "[    3.000000] e1000e 0000:00:19.0: Interrupt Throttling Rate checked",
        "[    4.000000] loop0: detected capacity change from 0 to 8",
        "[    5.000000] nvme0n1: p1 p2",
        "[    5.500000] nvme_core: registered nvme subsystem",
    ])
}

#[test]
fn boot_log_candidates_are_filtered_and_sorted() {
    let log = synthetic_boot_log();

    let candidates = log.driver_candidates();
    assert_eq!(
        candidates,
        vec![
            "e1000e".to_string(),
            "nvme_core".to_string(),
            "zram".to_string(),
        ],
        "noise, index names, and namespace devices must be filtered out"
    );
}

#[test]
fn every_candidate_gets_an_excerpt_and_urls() {
    let log = synthetic_boot_log();

    for name in log.driver_candidates() {
        let excerpt = log.relevant_line(&name);
        assert!(
            !excerpt.is_empty(),
            "candidate {name} was extracted from the log, so a line must match"
        );
        assert!(
            !excerpt.starts_with('['),
            "timestamp prefix must be stripped: {excerpt}"
        );

        let urls = SearchUrls::for_name(&name);
        assert!(
            urls.github.contains(name.as_str()),
            "plain names embed verbatim: {}",
            urls.github
        );
        assert!(urls.github.contains("repo%3Atorvalds%2Flinux"));
        assert!(urls.lkml.starts_with("https://lore.kernel.org/lkml/?q="));
        assert!(urls.patchwork.contains("project%3Alinux"));
    }
}

#[test]
fn underscore_names_fall_back_to_hyphen_spelling() {
    let log = KernelLog::from_lines(["[    6.000000] snd-hda-intel: bound to audio controller"]);

    assert_eq!(
        log.relevant_line("snd_hda_intel"),
        "snd-hda-intel: bound to audio controller"
    );
}
