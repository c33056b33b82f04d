//! Turns collected records into the text body of each report section.
//! Renderers are pure and take no host handles, so every section layout is
//! testable against synthetic records.

use crate::snapshot::{
    BootRecord, CpuSnapshot, DiskIoTotals, DiskPartition, GpuRecord, IfaceAddress, MemorySnapshot,
    NetworkInterface, NetworkIoTotals, SwapSnapshot, SystemIdentity,
};
use crate::units::format_bytes;
use chrono::{DateTime, Datelike, Local, Timelike};
use std::time::Duration;

pub fn identity(id: &SystemIdentity) -> String {
    format!(
        "System: {}\nNode Name: {}\nRelease: {}\nVersion: {}\nMachine: {}\nProcessor: {}",
        id.os_name, id.host_name, id.kernel_release, id.os_version, id.machine, id.processor
    )
}

pub fn boot(record: &BootRecord) -> String {
    let at = DateTime::from_timestamp(record.boot_time_unix, 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local);
    format!(
        "Boot Time: {}/{}/{} {:02}:{:02}:{:02}\nUptime: {}",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        humantime::format_duration(Duration::from_secs(record.uptime_secs)),
    )
}

pub fn cpu(snapshot: &CpuSnapshot) -> String {
    let mut lines = vec![
        format!(
            "Physical cores: {}",
            snapshot
                .physical_cores
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ),
        format!("Total cores: {}", snapshot.logical_cores),
        format!("Max Frequency: {}", frequency(snapshot.max_frequency_mhz)),
        format!("Min Frequency: {}", frequency(snapshot.min_frequency_mhz)),
        format!(
            "Current Frequency: {}",
            frequency(Some(snapshot.current_frequency_mhz))
        ),
        "CPU Usage Per Core:".to_string(),
    ];
    for (core, usage) in snapshot.per_core_usage_percent.iter().enumerate() {
        lines.push(format!("Core {core}: {usage:.1}%"));
    }
    lines.push(format!(
        "Total CPU Usage: {:.1}%",
        snapshot.total_usage_percent
    ));
    lines.join("\n")
}

fn frequency(mhz: Option<f64>) -> String {
    match mhz {
        Some(v) => format!("{v:.2}MHz"),
        None => "n/a".to_string(),
    }
}

const GPU_HEADERS: [&str; 9] = [
    "id",
    "name",
    "load",
    "free memory",
    "used memory",
    "total memory",
    "util memory",
    "temperature",
    "uuid",
];

/// Space-aligned grid in column order id..uuid. An empty GPU list still
/// renders the header row.
pub fn gpu_table(gpus: &[GpuRecord]) -> String {
    let rows: Vec<[String; 9]> = gpus
        .iter()
        .map(|g| {
            [
                g.id.clone(),
                g.name.clone(),
                format!("{:.1}%", g.load * 100.0),
                format_bytes(g.memory_free_bytes),
                format_bytes(g.memory_used_bytes),
                format_bytes(g.memory_total_bytes),
                format!("{:.1}%", g.memory_util * 100.0),
                format!("{:.1}°C", g.temperature_celsius),
                g.uuid.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 9] = GPU_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = vec![
        grid_line(&GPU_HEADERS.map(String::from), &widths),
        grid_line(&widths.map(|w| "-".repeat(w)), &widths),
    ];
    out.extend(rows.iter().map(|row| grid_line(row, &widths)));
    out.join("\n")
}

fn grid_line(cells: &[String; 9], widths: &[usize; 9]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn memory(snapshot: &MemorySnapshot) -> String {
    format!(
        "Total: {}\nAvailable: {}\nUsed: {}\nPercentage: {:.1}%",
        format_bytes(snapshot.total_bytes),
        format_bytes(snapshot.available_bytes),
        format_bytes(snapshot.used_bytes),
        snapshot.used_percent,
    )
}

pub fn swap(snapshot: Option<&SwapSnapshot>) -> String {
    match snapshot {
        Some(s) => format!(
            "Total: {}\nUsed: {}\nFree: {}\nPercentage: {:.1}%",
            format_bytes(s.total_bytes),
            format_bytes(s.used_bytes),
            format_bytes(s.free_bytes),
            s.used_percent,
        ),
        None => "No swap configured.".to_string(),
    }
}

pub fn disk_partitions(partitions: &[DiskPartition]) -> String {
    let mut lines = vec!["Partitions and Usage:".to_string()];
    if partitions.is_empty() {
        lines.push("No readable partitions detected.".to_string());
    }
    for p in partitions {
        lines.push(format!("=== Device: {} ===", p.device));
        lines.push(format!(" Mountpoint: {}", p.mountpoint));
        lines.push(format!(" File system type: {}", p.fs_type));
        lines.push(format!(" Total size: {}", format_bytes(p.total_bytes)));
        lines.push(format!(" Used: {}", format_bytes(p.used_bytes)));
        lines.push(format!(" Free: {}", format_bytes(p.free_bytes)));
        lines.push(format!(" Percentage: {:.1}%", p.used_percent));
    }
    lines.join("\n")
}

pub fn disk_io(io: &DiskIoTotals) -> String {
    format!(
        "Total read: {}\nTotal write: {}",
        format_bytes(io.read_bytes),
        format_bytes(io.written_bytes),
    )
}

pub fn network_interfaces(interfaces: &[NetworkInterface]) -> String {
    let mut lines = Vec::new();
    if interfaces.is_empty() {
        lines.push("No network interfaces detected.".to_string());
    }
    for iface in interfaces {
        lines.push(format!("=== Interface: {} ===", iface.name));
        for address in &iface.addresses {
            match address {
                IfaceAddress::V4 {
                    address,
                    netmask,
                    broadcast,
                } => {
                    lines.push(format!(" IP Address: {address}"));
                    lines.push(format!(" Netmask: {netmask}"));
                    lines.push(format!(" Broadcast IP: {broadcast}"));
                }
                IfaceAddress::Mac { address } => {
                    lines.push(format!(" MAC Address: {address}"));
                }
            }
        }
    }
    lines.join("\n")
}

pub fn network_io(io: &NetworkIoTotals) -> String {
    format!(
        "Total Bytes Sent: {}\nTotal Bytes Received: {}",
        format_bytes(io.bytes_sent),
        format_bytes(io.bytes_received),
    )
}
