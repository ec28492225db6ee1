/// Human-readable byte size with decimal (base-1000) units, as shown in the
/// upload progress message.
///
/// Trailing zeros after the decimal point are trimmed, so
/// `format_bytes(1000, 2)` renders as `"1 KB"`, not `"1.00 KB"`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const K: f64 = 1000.0;
    const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

    let exponent = ((bytes as f64).ln() / K.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / K.powi(exponent as i32);

    // ties round away from zero, so 2.5 KB at zero decimals is "3 KB"
    let scale = 10f64.powi(decimals as i32);
    let value = (value * scale).round() / scale;

    let formatted = format!("{value:.decimals$}");
    let trimmed = match formatted.find('.') {
        Some(_) => formatted.trim_end_matches('0').trim_end_matches('.'),
        None => formatted.as_str(),
    };

    format!("{} {}", trimmed, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero_bytes() {
        assert_eq!(format_bytes(0, 0), "0 B");
        assert_eq!(format_bytes(0, 2), "0 B");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_bytes(100, 0), "100 B");
        assert_eq!(format_bytes(999, 0), "999 B");
    }

    #[test]
    fn decimal_units() {
        assert_eq!(format_bytes(1000, 0), "1 KB");
        assert_eq!(format_bytes(1500, 1), "1.5 KB");
        assert_eq!(format_bytes(1500, 0), "2 KB");
        assert_eq!(format_bytes(2500, 0), "3 KB");
        assert_eq!(format_bytes(1250, 1), "1.3 KB");
        assert_eq!(format_bytes(1_000_000, 0), "1 MB");
        assert_eq!(format_bytes(2_500_000_000, 1), "2.5 GB");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_bytes(1000, 2), "1 KB");
        assert_eq!(format_bytes(1250, 2), "1.25 KB");
        assert_eq!(format_bytes(1200, 2), "1.2 KB");
    }
}
