#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use worktally::libs::record::WorkEventRecord;
    use worktally::libs::summary::{daily_summaries, DailySummary, SummaryCalculator, SummaryFormatter};

    fn record(date: &str, operator: &str, seconds: u64) -> WorkEventRecord {
        WorkEventRecord {
            date: Some(date.to_string()),
            operator_name: (!operator.is_empty()).then(|| operator.to_string()),
            duration_seconds: seconds,
            ..Default::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_daily_summaries_bucket_by_date() {
        let records = vec![
            record("2024-03-05", "Ana", 3_600),
            record("2024-03-04", "Ana Lopez", 1_800),
            record("2024-03-04", "ana", 600),
            record("2024-03-04", "Luis", 600),
            record("2024-03-05", "", 300),
        ];

        let breakdown = daily_summaries(&records);
        assert_eq!(breakdown.undated, 0);
        assert_eq!(
            breakdown.days,
            vec![
                DailySummary {
                    date: day(4),
                    total_work: 3_000,
                    record_count: 3,
                    operator_count: 2,
                },
                DailySummary {
                    date: day(5),
                    total_work: 3_900,
                    record_count: 2,
                    operator_count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_undated_records_are_counted_apart() {
        let records = vec![
            record("2024-03-04", "Ana", 600),
            record("not a date", "Ana", 600),
            WorkEventRecord::default(),
        ];

        let breakdown = daily_summaries(&records);
        assert_eq!(breakdown.days.len(), 1);
        assert_eq!(breakdown.undated, 2);
    }

    #[test]
    fn test_calculate_totals() {
        let days = vec![
            DailySummary {
                date: day(6),
                total_work: 7_200,
                record_count: 1,
                operator_count: 1,
            },
            DailySummary {
                date: day(4),
                total_work: 3_600,
                record_count: 1,
                operator_count: 1,
            },
        ];

        let (sorted, total, average) = days.calculate_totals();
        assert_eq!(sorted[0].date, day(4));
        assert_eq!(total, 10_800);
        assert_eq!(average, 5_400);
    }

    #[test]
    fn test_calculate_totals_empty() {
        let (days, total, average) = Vec::<DailySummary>::new().calculate_totals();
        assert!(days.is_empty());
        assert_eq!(total, 0);
        assert_eq!(average, 0);
    }

    #[test]
    fn test_format_summary() {
        let days = vec![DailySummary {
            date: day(4),
            total_work: 5_400,
            record_count: 3,
            operator_count: 2,
        }];

        let (daily, total, average) = days.calculate_totals().format_summary();
        assert_eq!(daily, vec![(day(4), "01:30".to_string())]);
        assert_eq!(total, "01:30");
        assert_eq!(average, "01:30");
    }
}
