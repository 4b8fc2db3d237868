#[cfg(test)]
mod tests {
    use chrono::Duration;
    use worktally::libs::formatter::{format_duration, format_percent, format_seconds, FormattedGroup};
    use worktally::libs::grouping::group;
    use worktally::libs::normalizer::{Dimension, TaskNames};
    use worktally::libs::record::WorkEventRecord;
    use worktally::libs::report::GroupView;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&Duration::seconds(59)), "00:00");
        assert_eq!(format_duration(&Duration::minutes(135)), "02:15");
        assert_eq!(format_duration(&Duration::hours(123)), "123:00");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "00:00");
        assert_eq!(format_seconds(3_599), "00:59");
        assert_eq!(format_seconds(27_000), "07:30");
        assert!(format_seconds(u64::MAX).len() > 5);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_formatted_group() {
        let records = vec![
            WorkEventRecord {
                task_code: Some("05".to_string()),
                module_id: Some("M1".to_string()),
                operator_name: Some("Ana".to_string()),
                date: Some("2024-03-04".to_string()),
                end_time: Some("11:00".to_string()),
                duration_seconds: 4_500,
                total_cycle_seconds: 9_000,
                since_order_placed_seconds: 86_400,
                until_due_seconds: 1_800,
                ..Default::default()
            },
            WorkEventRecord {
                task_code: Some("05".to_string()),
                module_id: Some("M2".to_string()),
                operator_name: Some("Ana".to_string()),
                duration_seconds: 2_700,
                ..Default::default()
            },
        ];
        let groups = group(&records, Dimension::Task);
        let view = GroupView::from_group(&groups[0], &TaskNames::default());

        let row = FormattedGroup::from(&view);
        assert_eq!(row.key, "05");
        assert_eq!(row.label, "MATRIMONIO");
        assert_eq!(row.records, 2);
        assert_eq!(row.open, 1);
        assert_eq!(row.total_work, "02:00");
        assert_eq!(row.total_cycle, "02:30");
        assert_eq!(row.since_order_placed, "24:00");
        assert_eq!(row.until_due, "00:30");
        assert_eq!(row.modules, 2);
        assert_eq!(row.time_per_module, "01:00");
        assert_eq!(row.last_event, "2024-03-04 11:00:00");
    }
}
