//! Duration formatting for track metadata display

/// Format a millisecond duration as zero-padded `mm:ss`
pub fn format_mm_ss(milliseconds: u64) -> String {
    let total_seconds = milliseconds / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_and_pads() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(5_000), "00:05");
        assert_eq!(format_mm_ss(65_000), "01:05");
        assert_eq!(format_mm_ss(600_000), "10:00");
    }

    #[test]
    fn truncates_sub_second_remainders() {
        assert_eq!(format_mm_ss(1_999), "00:01");
    }

    #[test]
    fn long_tracks_overflow_into_minutes() {
        assert_eq!(format_mm_ss(3_723_000), "62:03");
    }
}
