use crate::error::CollectError;
use crate::snapshot::{DiskIoTotals, DiskPartition};
use crate::units::percent;
use sysinfo::{Disk, Disks};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DiskReport {
    pub partitions: Vec<DiskPartition>,
    pub io: DiskIoTotals,
}

pub fn collect() -> DiskReport {
    let disks = Disks::new_with_refreshed_list();
    let partitions = usable_partitions(disks.list().iter().map(partition_usage));
    let io = io_totals(&disks);
    DiskReport { partitions, io }
}

/// Per-partition usage query. Mounts the OS refuses to size (pseudo
/// filesystems, inaccessible media) surface here as a skip, not a report
/// failure.
fn partition_usage(disk: &Disk) -> Result<DiskPartition, CollectError> {
    let mountpoint = disk.mount_point().display().to_string();
    let total_bytes = disk.total_space();
    if total_bytes == 0 {
        return Err(CollectError::Permission(mountpoint));
    }

    let free_bytes = disk.available_space();
    let used_bytes = total_bytes.saturating_sub(free_bytes);
    Ok(DiskPartition {
        device: disk.name().to_string_lossy().to_string(),
        mountpoint,
        fs_type: disk.file_system().to_string_lossy().to_string(),
        total_bytes,
        used_bytes,
        free_bytes,
        used_percent: percent(used_bytes as f64, total_bytes as f64),
    })
}

/// Collect the partitions whose usage query succeeded; denied ones are
/// logged and dropped so enumeration always runs to the end.
fn usable_partitions(
    outcomes: impl IntoIterator<Item = Result<DiskPartition, CollectError>>,
) -> Vec<DiskPartition> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(partition) => Some(partition),
            Err(err) => {
                debug!(error = %err, "skipping partition");
                None
            }
        })
        .collect()
}

/// Cumulative read/write counters since boot, summed across disks.
fn io_totals(disks: &Disks) -> DiskIoTotals {
    disks.list().iter().fold(DiskIoTotals::default(), |acc, d| {
        let usage = d.usage();
        DiskIoTotals {
            read_bytes: acc.read_bytes.saturating_add(usage.total_read_bytes),
            written_bytes: acc.written_bytes.saturating_add(usage.total_written_bytes),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(mountpoint: &str) -> DiskPartition {
        DiskPartition {
            device: "/dev/sda1".to_string(),
            mountpoint: mountpoint.to_string(),
            fs_type: "ext4".to_string(),
            total_bytes: 1000,
            used_bytes: 250,
            free_bytes: 750,
            used_percent: 25.0,
        }
    }

    #[test]
    fn denied_partition_is_skipped_and_the_rest_survive() {
        let outcomes = vec![
            Ok(partition("/")),
            Err(CollectError::Permission("/mnt/cdrom".to_string())),
            Ok(partition("/home")),
        ];

        let kept = usable_partitions(outcomes);
        let mounts: Vec<&str> = kept.iter().map(|p| p.mountpoint.as_str()).collect();
        assert_eq!(mounts, ["/", "/home"]);
    }

    #[test]
    fn all_denied_yields_an_empty_list() {
        let outcomes = vec![
            Err(CollectError::Permission("/a".to_string())),
            Err(CollectError::Query("bad read".to_string())),
        ];
        assert!(usable_partitions(outcomes).is_empty());
    }
}
