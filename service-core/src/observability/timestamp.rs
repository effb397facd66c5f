//! Wall-clock stamps for request logs, rendered in India Standard Time.

use chrono::{DateTime, FixedOffset, Utc};

/// UTC+05:30. IST has no daylight saving, so a fixed offset is exact.
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Current time as `yyyy-MM-dd HH:mm:ss IST`.
pub fn ist_now() -> String {
    format_ist(Utc::now())
}

pub fn format_ist(instant: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECONDS) {
        Some(ist) => instant
            .with_timezone(&ist)
            .format("%Y-%m-%d %H:%M:%S IST")
            .to_string(),
        None => instant.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn shifts_utc_by_five_and_a_half_hours() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap();
        assert_eq!(format_ist(instant), "2024-01-15 11:30:00 IST");
    }

    #[test]
    fn rolls_over_to_next_day() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 31, 20, 45, 9).unwrap();
        assert_eq!(format_ist(instant), "2024-04-01 02:15:09 IST");
    }

    #[test]
    fn now_has_expected_shape() {
        let stamp = ist_now();
        assert_eq!(stamp.len(), "yyyy-MM-dd HH:mm:ss IST".len());
        assert!(stamp.ends_with(" IST"));
    }
}
