#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use worktally::libs::effective::{compute_effective, ShiftConfig};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_default_shift() {
        let shift = ShiftConfig::default();
        assert_eq!(shift.start, hm(6, 30));
        assert_eq!(shift.length_seconds, 27_000);
        assert_eq!(shift.break_seconds(), 1_800);
    }

    #[test]
    fn test_after_break() {
        let time = compute_effective(at(10, 15), &ShiftConfig::default(), 0);

        assert_eq!(time.raw_elapsed, 13_500);
        assert_eq!(time.break_overlap, 1_800);
        assert_eq!(time.effective_elapsed, 11_700);
        assert_eq!(time.inactive_seconds, 11_700);
        assert_eq!(time.utilization_percent, 0);
    }

    #[test]
    fn test_during_break_counts_partial_overlap() {
        let time = compute_effective(at(9, 45), &ShiftConfig::default(), 0);

        assert_eq!(time.raw_elapsed, 11_700);
        assert_eq!(time.break_overlap, 900);
        assert_eq!(time.effective_elapsed, 10_800);
    }

    #[test]
    fn test_before_shift_start_is_zero() {
        let time = compute_effective(at(5, 0), &ShiftConfig::default(), 3_600);

        assert_eq!(time.raw_elapsed, 0);
        assert_eq!(time.effective_elapsed, 0);
        assert_eq!(time.active_seconds, 0);
        assert_eq!(time.utilization_percent, 0);
    }

    #[test]
    fn test_night_shift_continues_past_midnight() {
        let shift = ShiftConfig::new(hm(22, 0), 28_800, hm(2, 0), hm(3, 0));
        let night = |hour: u32, minute: u32| {
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(hour, minute, 0).unwrap()
        };

        let time = compute_effective(night(1, 0), &shift, 0);
        assert_eq!(time.raw_elapsed, 10_800);
        assert_eq!(time.break_overlap, 0);
        assert_eq!(time.effective_elapsed, 10_800);

        let time = compute_effective(night(3, 30), &shift, 0);
        assert_eq!(time.raw_elapsed, 19_800);
        assert_eq!(time.break_overlap, 3_600);
        assert_eq!(time.effective_elapsed, 16_200);

        let time = compute_effective(night(5, 30), &shift, 0);
        assert_eq!(time.raw_elapsed, 27_000);
        assert_eq!(time.effective_elapsed, 23_400);

        let time = compute_effective(night(21, 0), &shift, 0);
        assert_eq!(time.raw_elapsed, 0);
        assert_eq!(shift.start_for(night(21, 0)), night(22, 0));
    }

    #[test]
    fn test_after_shift_end_is_clamped() {
        let time = compute_effective(at(18, 0), &ShiftConfig::default(), 0);

        assert_eq!(time.raw_elapsed, 27_000);
        assert_eq!(time.break_overlap, 1_800);
        assert_eq!(time.effective_elapsed, 25_200);
    }

    #[test]
    fn test_active_time_is_capped_and_utilization_rounded() {
        let shift = ShiftConfig::default();

        let time = compute_effective(at(10, 15), &shift, 5_850);
        assert_eq!(time.active_seconds, 5_850);
        assert_eq!(time.inactive_seconds, 5_850);
        assert_eq!(time.utilization_percent, 50);

        let time = compute_effective(at(10, 15), &shift, 100_000);
        assert_eq!(time.active_seconds, 11_700);
        assert_eq!(time.inactive_seconds, 0);
        assert_eq!(time.utilization_percent, 100);
    }

    #[test]
    fn test_effective_never_exceeds_shift_length() {
        let shift = ShiftConfig::default();
        for hour in 0..24 {
            for minute in [0, 15, 30, 45] {
                let time = compute_effective(at(hour, minute), &shift, 0);
                assert!(time.effective_elapsed <= shift.length_seconds);
                assert!(time.break_overlap <= time.raw_elapsed);
                assert_eq!(time.raw_elapsed, time.break_overlap + time.effective_elapsed);
            }
        }
    }

    #[test]
    fn test_inverted_break_window_deducts_nothing() {
        let shift = ShiftConfig::new(hm(6, 30), 27_000, hm(10, 0), hm(9, 30));
        let time = compute_effective(at(10, 15), &shift, 0);

        assert_eq!(shift.break_seconds(), 0);
        assert_eq!(time.break_overlap, 0);
        assert_eq!(time.effective_elapsed, 13_500);
    }

    #[test]
    fn test_break_outside_shift_deducts_nothing() {
        let shift = ShiftConfig::new(hm(6, 30), 3_600, hm(9, 30), hm(10, 0));
        let time = compute_effective(at(12, 0), &shift, 0);

        assert_eq!(time.raw_elapsed, 3_600);
        assert_eq!(time.break_overlap, 0);
    }

    #[test]
    fn test_shift_config_serializes_times_as_hhmm() {
        let json = serde_json::to_value(ShiftConfig::default()).unwrap();
        assert_eq!(json["start"], "06:30");
        assert_eq!(json["break_end"], "10:00");

        let parsed: ShiftConfig = serde_json::from_value(serde_json::json!({
            "start": "07:00",
            "length_seconds": 28800,
            "break_start": "12:00:00",
            "break_end": "12:30"
        }))
        .unwrap();
        assert_eq!(parsed.start, hm(7, 0));
        assert_eq!(parsed.break_start, hm(12, 0));
    }
}
