use chrono::NaiveDate;

/// Format a duration in seconds as `MM:SS`, or `HH:MM:SS` from one hour up.
pub fn duration_label(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours == 0 {
        format!("{mins:02}:{secs:02}")
    } else {
        format!("{hours:02}:{mins:02}:{secs:02}")
    }
}

/// Format an upload date carried as a YYYYMMDD integer as `YYYY-MM-DD`.
/// Values that are not a calendar date come back as their raw digits.
pub fn upload_date_label(yyyymmdd: u64) -> String {
    // fewer than eight digits cannot be a YYYYMMDD value
    if yyyymmdd < 10_000_000 {
        return yyyymmdd.to_string();
    }

    let year = (yyyymmdd / 10_000) as i32;
    let month = ((yyyymmdd / 100) % 100) as u32;
    let day = (yyyymmdd % 100) as u32;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => yyyymmdd.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_use_minutes_and_seconds() {
        assert_eq!(duration_label(0), "00:00");
        assert_eq!(duration_label(59), "00:59");
        assert_eq!(duration_label(61), "01:01");
        assert_eq!(duration_label(3599), "59:59");
    }

    #[test]
    fn hour_long_durations_grow_a_third_field() {
        assert_eq!(duration_label(3600), "01:00:00");
        assert_eq!(duration_label(3661), "01:01:01");
        assert_eq!(duration_label(36_000), "10:00:00");
    }

    #[test]
    fn upload_dates_render_iso_style() {
        assert_eq!(upload_date_label(20240315), "2024-03-15");
        assert_eq!(upload_date_label(19991231), "1999-12-31");
    }

    #[test]
    fn impossible_dates_fall_back_to_raw_digits() {
        assert_eq!(upload_date_label(20240231), "20240231");
        assert_eq!(upload_date_label(0), "0");
        assert_eq!(upload_date_label(123), "123");
    }
}
