#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use worktally::libs::error::WorktallyError;
    use worktally::libs::filter::{DateRange, RecordFilter};
    use worktally::libs::normalizer::TaskNames;
    use worktally::libs::record::WorkEventRecord;

    fn record(date: &str, operator: &str, task: &str, order: &str, module: &str) -> WorkEventRecord {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
        WorkEventRecord {
            date: field(date),
            operator_name: field(operator),
            task_code: field(task),
            order_number: field(order),
            module_id: field(module),
            duration_seconds: 60,
            ..Default::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_date_range_validation() {
        assert!(DateRange::new(day(1), day(5)).is_ok());
        assert!(matches!(
            DateRange::new(day(5), day(1)),
            Err(WorktallyError::InvalidDateRange { .. })
        ));
        assert!(matches!(DateRange::parse("2024-03-01", "03/05/2024"), Err(WorktallyError::InvalidDate(_))));

        let range = DateRange::parse("2024-03-01", "2024-03-05").unwrap();
        assert!(range.contains(day(1)));
        assert!(range.contains(day(5)));
        assert!(!range.contains(day(6)));
        assert!(DateRange::day(day(2)).contains(day(2)));
    }

    #[test]
    fn test_open_ended_bounds() {
        assert_eq!(DateRange::from_bounds(None, None).unwrap(), None);

        let from = DateRange::from_bounds(Some("2024-03-03"), None).unwrap().unwrap();
        assert!(from.contains(day(31)));
        assert!(!from.contains(day(2)));

        let to = DateRange::from_bounds(None, Some("2024-03-03")).unwrap().unwrap();
        assert!(to.contains(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
        assert!(!to.contains(day(4)));

        assert!(DateRange::from_bounds(Some("2024-03-05"), Some("2024-03-01")).is_err());
    }

    #[test]
    fn test_range_excludes_undated_records() {
        let records = vec![
            record("2024-03-01", "Ana", "01", "P1", "M1"),
            record("2024-03-09", "Ana", "01", "P1", "M1"),
            record("garbage", "Ana", "01", "P1", "M1"),
            record("", "Ana", "01", "P1", "M1"),
        ];
        let filter = RecordFilter::new().with_range(Some(DateRange::parse("2024-03-01", "2024-03-05").unwrap()));

        let kept = filter.apply(&records, &TaskNames::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_search_matches_every_identifying_field() {
        let records = vec![
            record("2024-03-01", "Ana Lopez", "01", "P-100", "MOD-7"),
            record("2024-03-01", "Luis", "03", "P-200", "MOD-8"),
        ];
        let names = TaskNames::default();
        let found = |text: &str| {
            RecordFilter::new()
                .with_search(Some(text.to_string()))
                .apply(&records, &names)
                .len()
        };

        assert_eq!(found("lopez"), 1);
        assert_eq!(found("p-200"), 1);
        assert_eq!(found("mod-"), 2);
        assert_eq!(found("armado"), 1);
        assert_eq!(found("corte"), 1);
        assert_eq!(found("nobody"), 0);
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let records = vec![record("2024-03-01", "Ana", "01", "P1", "M1"), record("", "", "", "", "")];
        let filter = RecordFilter::new().with_search(Some("   ".to_string()));

        assert_eq!(filter.search, None);
        assert_eq!(filter.apply(&records, &TaskNames::default()).len(), 2);
    }
}
