//! Report orchestration: runs every collector in a fixed order and prints
//! one banner-delimited section per subsystem. No section's failure may
//! abort another; the only fatal case is an unanswerable identity query.

use crate::collectors::{cpu, disk, gpu, host, memory, network};
use crate::error::{CollectError, ReportError};
use crate::render;
use crate::snapshot::GpuRecord;
use std::io::Write;
use sysinfo::System;
use tracing::warn;

const BANNER_WIDTH: usize = 40;
const SUB_BANNER_WIDTH: usize = 20;

pub struct ReportBuilder {
    sys: System,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            sys: System::new_all(),
        }
    }

    /// Produce the whole report. Section order is fixed: identity, boot
    /// time, CPU, GPU, memory (with nested swap), disk, network.
    pub fn write_report(&mut self, out: &mut dyn Write) -> Result<(), ReportError> {
        banner(out, BANNER_WIDTH, "System Information")?;
        let identity = host::collect_identity(&self.sys).map_err(ReportError::Identity)?;
        writeln!(out, "{}", render::identity(&identity))?;

        banner(out, BANNER_WIDTH, "Boot Time")?;
        writeln!(out, "{}", render::boot(&host::collect_boot()))?;

        banner(out, BANNER_WIDTH, "CPU Info")?;
        writeln!(out, "{}", render::cpu(&cpu::collect(&mut self.sys)))?;

        banner(out, BANNER_WIDTH, "GPU Information")?;
        writeln!(out, "{}", render::gpu_table(&collect_gpus()))?;

        banner(out, BANNER_WIDTH, "Memory Information")?;
        writeln!(out, "{}", render::memory(&memory::collect_memory(&mut self.sys)))?;
        banner(out, SUB_BANNER_WIDTH, "SWAP")?;
        writeln!(out, "{}", render::swap(memory::collect_swap(&self.sys).ok().as_ref()))?;

        banner(out, BANNER_WIDTH, "Disk Information")?;
        let disk_report = disk::collect();
        writeln!(out, "{}", render::disk_partitions(&disk_report.partitions))?;
        writeln!(out, "{}", render::disk_io(&disk_report.io))?;

        banner(out, BANNER_WIDTH, "Network Information")?;
        let network_report = network::collect();
        writeln!(out, "{}", render::network_interfaces(&network_report.interfaces))?;
        writeln!(out, "{}", render::network_io(&network_report.io))?;

        Ok(())
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// No GPU tooling and zero GPUs render the same way: a header-only table.
/// Unexpected failures additionally leave a notice on stderr.
fn collect_gpus() -> Vec<GpuRecord> {
    match gpu::collect() {
        Ok(gpus) => gpus,
        Err(err @ CollectError::Query(_)) => {
            warn!(error = %err, "GPU query failed");
            Vec::new()
        }
        Err(_) => Vec::new(),
    }
}

fn banner(out: &mut dyn Write, width: usize, title: &str) -> std::io::Result<()> {
    let bar = "=".repeat(width);
    writeln!(out, "{bar} {title} {bar}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_TITLES: [&str; 8] = [
        "System Information",
        "Boot Time",
        "CPU Info",
        "GPU Information",
        "Memory Information",
        "SWAP",
        "Disk Information",
        "Network Information",
    ];

    #[test]
    fn full_report_has_every_banner_in_order() {
        let mut out = Vec::new();
        ReportBuilder::new()
            .write_report(&mut out)
            .expect("report should complete on a live host");
        let text = String::from_utf8(out).unwrap();

        let mut cursor = 0;
        for title in SECTION_TITLES {
            let banner = format!(" {title} ");
            let at = text[cursor..]
                .find(&banner)
                .unwrap_or_else(|| panic!("banner {title:?} missing or out of order"));
            cursor += at + banner.len();
        }
    }

    #[test]
    fn cpu_section_core_lines_match_the_reported_core_count() {
        let mut out = Vec::new();
        ReportBuilder::new().write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let total: usize = text
            .lines()
            .find_map(|l| l.strip_prefix("Total cores: "))
            .expect("total cores line")
            .trim()
            .parse()
            .unwrap();
        let core_lines = text.lines().filter(|l| l.starts_with("Core ")).count();
        assert!(total >= 1);
        assert_eq!(core_lines, total);
    }
}
