use crate::error::CollectError;
use crate::snapshot::{BootRecord, SystemIdentity};
use sysinfo::System;

const UNKNOWN: &str = "unknown";

/// Static host identity. The one query whose total failure makes the whole
/// report meaningless, hence the `Result`.
pub fn collect_identity(sys: &System) -> Result<SystemIdentity, CollectError> {
    let os_name = System::name();
    let host_name = System::host_name();
    let kernel_release = System::kernel_version();

    if os_name.is_none() && host_name.is_none() && kernel_release.is_none() {
        return Err(CollectError::Query(
            "no OS name, host name, or kernel version reported".to_string(),
        ));
    }

    Ok(SystemIdentity {
        os_name: os_name.unwrap_or_else(|| UNKNOWN.to_string()),
        host_name: host_name.unwrap_or_else(|| UNKNOWN.to_string()),
        kernel_release: kernel_release.unwrap_or_else(|| UNKNOWN.to_string()),
        os_version: System::os_version().unwrap_or_else(|| UNKNOWN.to_string()),
        machine: System::cpu_arch(),
        processor: processor_brand(sys),
    })
}

pub fn collect_boot() -> BootRecord {
    BootRecord {
        boot_time_unix: System::boot_time() as i64,
        uptime_secs: System::uptime(),
    }
}

fn processor_brand(sys: &System) -> String {
    normalize_processor(sys.cpus().first().map(|c| c.brand().to_string()))
}

/// Some platforms report an empty brand string; surface that as an explicit
/// `unknown` instead of a blank field.
fn normalize_processor(brand: Option<String>) -> String {
    brand
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
