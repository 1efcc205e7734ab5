//! Display formatting helpers for sizes and parameter values.

const MIB: u64 = 1024 * 1024;
const KIB: u64 = 1024;

/// Size in megabytes with two decimals, as shown in the file-info panel.
///
/// `bytes / 1024 / 1024`, so `1_572_864` renders as `"1.50"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / MIB as f64)
}

/// Compact rendering of a size limit for error messages (`16MB`, `512KB`).
pub fn format_limit(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{}MB", format_megabytes(bytes))
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Fixed-decimal rendering of a numeric parameter value.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00");
        assert_eq!(format_megabytes(1), "0.00");
        assert_eq!(format_megabytes(1_572_864), "1.50");
        assert_eq!(format_megabytes(16 * MIB), "16.00");
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(16 * MIB), "16MB");
        assert_eq!(format_limit(512 * KIB), "512KB");
        assert_eq!(format_limit(MIB + MIB / 2), "1.50MB");
        assert_eq!(format_limit(100), "100 bytes");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.3456, 2), "12.35");
        assert_eq!(format_number(186.0, 0), "186");
        assert_eq!(format_number(-45.5, 1), "-45.5");
        assert_eq!(format_number(f64::NAN, 2), "NaN");
    }
}
