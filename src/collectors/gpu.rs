use crate::error::CollectError;
use crate::snapshot::GpuRecord;
use std::process::Command;

const MIB: u64 = 1024 * 1024;

/// GPU inventory via `nvidia-smi`. A missing binary or a failed invocation
/// means no queryable GPUs on this host, which is a valid (empty) result for
/// the caller to render.
pub fn collect() -> Result<Vec<GpuRecord>, CollectError> {
    let output = Command::new("nvidia-smi")
        .args([
            "--query-gpu=index,name,uuid,utilization.gpu,memory.free,memory.used,memory.total,temperature.gpu",
            "--format=csv,noheader,nounits",
        ])
        .output()
        .map_err(|_| CollectError::Unavailable("GPU telemetry"))?;

    if !output.status.success() {
        return Err(CollectError::Unavailable("GPU telemetry"));
    }

    let text = String::from_utf8(output.stdout)
        .map_err(|err| CollectError::Query(format!("nvidia-smi output not UTF-8: {err}")))?;

    Ok(text.lines().filter_map(parse_line).collect())
}

fn parse_line(line: &str) -> Option<GpuRecord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 8 {
        return None;
    }

    let memory_free_bytes = parse_u64_loose(parts[4]).unwrap_or(0).saturating_mul(MIB);
    let memory_used_bytes = parse_u64_loose(parts[5]).unwrap_or(0).saturating_mul(MIB);
    let memory_total_bytes = parse_u64_loose(parts[6]).unwrap_or(0).saturating_mul(MIB);
    let memory_util = if memory_total_bytes > 0 {
        memory_used_bytes as f64 / memory_total_bytes as f64
    } else {
        0.0
    };

    Some(GpuRecord {
        id: parts[0].to_string(),
        name: parts[1].to_string(),
        uuid: parts[2].to_string(),
        load: parse_f64_loose(parts[3]).unwrap_or(0.0) / 100.0,
        memory_free_bytes,
        memory_used_bytes,
        memory_total_bytes,
        memory_util,
        temperature_celsius: parse_f64_loose(parts[7]).unwrap_or(0.0),
    })
}

/// nvidia-smi writes `[N/A]` or locale-decimal values for some fields, so
/// parse what digits are there instead of failing the row.
fn parse_f64_loose(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Some(v);
    }

    let filtered: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+'))
        .collect();
    if filtered.is_empty() {
        return None;
    }
    filtered.replace(',', ".").parse::<f64>().ok()
}

fn parse_u64_loose(input: &str) -> Option<u64> {
    parse_f64_loose(input).map(|v| if v < 0.0 { 0 } else { v as u64 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_query_row() {
        let line = "0, NVIDIA GeForce RTX 3080, GPU-8f6f0dc5-dead-beef-0000-aabbccddeeff, 37, 8011, 2181, 10240, 55";
        let gpu = parse_line(line).expect("row should parse");

        assert_eq!(gpu.id, "0");
        assert_eq!(gpu.name, "NVIDIA GeForce RTX 3080");
        assert_eq!(gpu.uuid, "GPU-8f6f0dc5-dead-beef-0000-aabbccddeeff");
        assert!((gpu.load - 0.37).abs() < 1e-9);
        assert_eq!(gpu.memory_free_bytes, 8011 * MIB);
        assert_eq!(gpu.memory_used_bytes, 2181 * MIB);
        assert_eq!(gpu.memory_total_bytes, 10240 * MIB);
        assert!((gpu.memory_util - 2181.0 / 10240.0).abs() < 1e-9);
        assert!((gpu.temperature_celsius - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn not_supported_fields_default_instead_of_dropping_the_row() {
        let line = "1, Some GPU, GPU-1234, [N/A], [N/A], [N/A], [N/A], [N/A]";
        let gpu = parse_line(line).expect("row should parse");
        assert_eq!(gpu.load, 0.0);
        assert_eq!(gpu.memory_total_bytes, 0);
        assert_eq!(gpu.memory_util, 0.0);
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(parse_line("0, broken").is_none());
        assert!(parse_line("").is_none());
    }
}
