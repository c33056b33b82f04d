//! Byte-count formatting shared by every section renderer.

const FACTOR: f64 = 1024.0;
const PREFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Scale `bytes` to the largest 1024-based unit that keeps the value below
/// 1024 and append `suffix`. Values past the petabyte range stay in `P`.
pub fn format_size(bytes: f64, suffix: &str) -> String {
    let mut value = bytes;
    for prefix in &PREFIXES[..PREFIXES.len() - 1] {
        if value < FACTOR {
            return format!("{value:.2}{prefix}{suffix}");
        }
        value /= FACTOR;
    }
    format!("{value:.2}P{suffix}")
}

pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes as f64, "B")
}

pub fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values() {
        assert_eq!(format_size(0.0, "B"), "0.00B");
        assert_eq!(format_size(1023.0, "B"), "1023.00B");
        assert_eq!(format_size(1024.0, "B"), "1.00KB");
        assert_eq!(format_size(1024f64.powi(5), "B"), "1.00PB");
    }

    #[test]
    fn oversized_values_stay_in_petabytes() {
        assert_eq!(format_size(1024f64.powi(6), "B"), "1024.00PB");
    }

    #[test]
    fn formatted_value_scales_back_to_input() {
        let scales = [
            ("PB", 1024f64.powi(5)),
            ("TB", 1024f64.powi(4)),
            ("GB", 1024f64.powi(3)),
            ("MB", 1024f64.powi(2)),
            ("KB", 1024.0),
            ("B", 1.0),
        ];
        for bytes in [0.0, 1.0, 512.0, 1023.0, 1024.0, 65_536.0, 3.7e9, 1.2e13] {
            let text = format_size(bytes, "B");
            let (unit, scale) = scales
                .iter()
                .find(|(u, _)| text.ends_with(u))
                .expect("unit suffix");
            let value: f64 = text[..text.len() - unit.len()].parse().unwrap();
            let back = value * scale;
            // two decimal places of the scaled value
            assert!(
                (back - bytes).abs() <= 0.005 * scale + 0.01,
                "{text} does not round-trip to {bytes}"
            );
        }
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent(5.0, 0.0), 0.0);
        assert!((percent(1.0, 4.0) - 25.0).abs() < f64::EPSILON);
    }
}
