use crate::snapshot::CpuSnapshot;
use std::thread;
use std::time::Duration;
use sysinfo::System;

/// Window over which per-core utilization is measured. This sleep is the
/// only intentional delay in the whole report.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub fn collect(sys: &mut System) -> CpuSnapshot {
    // Usage is a delta between two refreshes, so prime, wait, read.
    sys.refresh_cpu_all();
    thread::sleep(SAMPLE_INTERVAL);
    sys.refresh_cpu_all();

    let per_core_usage_percent: Vec<f32> = sys.cpus().iter().map(|c| c.cpu_usage()).collect();
    let current_frequency_mhz = sys
        .cpus()
        .iter()
        .map(|c| c.frequency())
        .max()
        .unwrap_or(0) as f64;
    let (min_frequency_mhz, max_frequency_mhz) = cpufreq_limits();

    CpuSnapshot {
        physical_cores: sys.physical_core_count(),
        logical_cores: sys.cpus().len(),
        min_frequency_mhz,
        max_frequency_mhz,
        current_frequency_mhz,
        per_core_usage_percent,
        total_usage_percent: sys.global_cpu_usage(),
    }
}

/// sysinfo only exposes the current frequency; the scaling limits live in
/// the cpufreq sysfs on Linux and are simply absent elsewhere.
#[cfg(target_os = "linux")]
fn cpufreq_limits() -> (Option<f64>, Option<f64>) {
    const CPUFREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq";
    (
        read_khz(&format!("{CPUFREQ}/cpuinfo_min_freq")),
        read_khz(&format!("{CPUFREQ}/cpuinfo_max_freq")),
    )
}

#[cfg(target_os = "linux")]
fn read_khz(path: &str) -> Option<f64> {
    let raw = std::fs::read_to_string(path).ok()?;
    let khz: f64 = raw.trim().parse().ok()?;
    Some(khz / 1000.0)
}

#[cfg(not(target_os = "linux"))]
fn cpufreq_limits() -> (Option<f64>, Option<f64>) {
    (None, None)
}
