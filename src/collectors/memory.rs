use crate::error::CollectError;
use crate::snapshot::{MemorySnapshot, SwapSnapshot};
use crate::units::percent;
use sysinfo::System;

pub fn collect_memory(sys: &mut System) -> MemorySnapshot {
    sys.refresh_memory();

    let total_bytes = sys.total_memory();
    let used_bytes = sys.used_memory();
    MemorySnapshot {
        total_bytes,
        available_bytes: sys.available_memory(),
        used_bytes,
        used_percent: percent(used_bytes as f64, total_bytes as f64),
    }
}

/// Swap is optional on any host; zero capacity means none is configured.
pub fn collect_swap(sys: &System) -> Result<SwapSnapshot, CollectError> {
    let total_bytes = sys.total_swap();
    if total_bytes == 0 {
        return Err(CollectError::Unavailable("swap"));
    }

    let used_bytes = sys.used_swap();
    Ok(SwapSnapshot {
        total_bytes,
        used_bytes,
        free_bytes: sys.free_swap(),
        used_percent: percent(used_bytes as f64, total_bytes as f64),
    })
}
