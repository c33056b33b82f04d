//! Value records produced by the collectors. All of them are read once,
//! handed to a renderer, and dropped; nothing here outlives the report run.

use std::net::Ipv4Addr;

#[derive(Debug, Clone)]
pub struct SystemIdentity {
    pub os_name: String,
    pub host_name: String,
    pub kernel_release: String,
    pub os_version: String,
    pub machine: String,
    /// CPU brand string; `unknown` when the platform reports nothing.
    pub processor: String,
}

#[derive(Debug, Clone)]
pub struct BootRecord {
    pub boot_time_unix: i64,
    pub uptime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CpuSnapshot {
    pub physical_cores: Option<usize>,
    pub logical_cores: usize,
    pub min_frequency_mhz: Option<f64>,
    pub max_frequency_mhz: Option<f64>,
    pub current_frequency_mhz: f64,
    pub per_core_usage_percent: Vec<f32>,
    pub total_usage_percent: f32,
}

#[derive(Debug, Clone)]
pub struct GpuRecord {
    pub id: String,
    pub name: String,
    /// Load as a 0..1 fraction; renderers scale to percent.
    pub load: f64,
    pub memory_free_bytes: u64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    /// used/total as a 0..1 fraction.
    pub memory_util: f64,
    pub temperature_celsius: f64,
    pub uuid: String,
}

#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone)]
pub struct SwapSnapshot {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone)]
pub struct DiskPartition {
    pub device: String,
    pub mountpoint: String,
    pub fs_type: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DiskIoTotals {
    pub read_bytes: u64,
    pub written_bytes: u64,
}

/// One reportable address of an interface. Families other than IPv4 and
/// link-layer never make it into this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IfaceAddress {
    V4 {
        address: Ipv4Addr,
        netmask: Ipv4Addr,
        broadcast: Ipv4Addr,
    },
    Mac {
        address: String,
    },
}

#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<IfaceAddress>,
}

#[derive(Debug, Clone, Default)]
pub struct NetworkIoTotals {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}
