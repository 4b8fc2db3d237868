#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use worktally::libs::effective::ShiftConfig;
    use worktally::libs::normalizer::{Dimension, TaskNames};
    use worktally::libs::record::WorkEventRecord;
    use worktally::libs::report::{build_report, Drill, ReportOptions};

    fn record(operator: &str, task: &str, seconds: u64) -> WorkEventRecord {
        WorkEventRecord {
            operator_name: Some(operator.to_string()),
            task_code: Some(task.to_string()),
            order_number: Some("P1".to_string()),
            module_id: Some("M1".to_string()),
            duration_seconds: seconds,
            ..Default::default()
        }
    }

    fn records() -> Vec<WorkEventRecord> {
        vec![
            record("Ana", "01", 1_800),
            record("Luis", "01", 1_200),
            record("Luis", "07", 600),
        ]
    }

    #[test]
    fn test_plain_report() {
        let records = records();
        let views = build_report(
            &records,
            Dimension::Task,
            &ReportOptions::default(),
            &TaskNames::default(),
            &ShiftConfig::default(),
        );

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].key, "01");
        assert_eq!(views[0].display_label, "CORTE");
        assert_eq!(views[0].aggregate.total_work, 3_000);
        assert_eq!(views[1].display_label, "ACRISTALADO");
        assert!(views.iter().all(|v| v.effective.is_none() && v.breakdown.is_none()));
    }

    #[test]
    fn test_auto_drill_expands_shared_groups_only() {
        let records = records();
        let options = ReportOptions {
            drill: Drill::Auto,
            effective_at: None,
        };
        let views = build_report(&records, Dimension::Task, &options, &TaskNames::default(), &ShiftConfig::default());

        let breakdown = views[0].breakdown.as_ref().unwrap();
        assert_eq!(breakdown.dimension, Dimension::Operator);
        let keys: Vec<&str> = breakdown.subgroups.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["ANA", "LUIS"]);
        assert!(views[1].breakdown.is_none());
    }

    #[test]
    fn test_explicit_drill_uses_task_labels() {
        let records = records();
        let options = ReportOptions {
            drill: Drill::By(Dimension::Task),
            effective_at: None,
        };
        let views = build_report(
            &records,
            Dimension::Operator,
            &options,
            &TaskNames::default(),
            &ShiftConfig::default(),
        );

        let luis = views.iter().find(|v| v.key == "LUIS").unwrap();
        let labels: Vec<&str> = luis
            .breakdown
            .as_ref()
            .unwrap()
            .subgroups
            .iter()
            .map(|s| s.display_label.as_str())
            .collect();
        assert_eq!(labels, vec!["CORTE", "ACRISTALADO"]);

        let ana = views.iter().find(|v| v.key == "ANA").unwrap();
        assert_eq!(ana.breakdown.as_ref().unwrap().subgroups.len(), 1);
    }

    #[test]
    fn test_effective_time_per_group() {
        let records = records();
        let now = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(7, 30, 0).unwrap();
        let options = ReportOptions {
            drill: Drill::None,
            effective_at: Some(now),
        };
        let views = build_report(
            &records,
            Dimension::Operator,
            &options,
            &TaskNames::default(),
            &ShiftConfig::default(),
        );

        let ana = views[0].effective.unwrap();
        assert_eq!(ana.effective_elapsed, 3_600);
        assert_eq!(ana.active_seconds, 1_800);
        assert_eq!(ana.utilization_percent, 50);

        let luis = views[1].effective.unwrap();
        assert_eq!(luis.active_seconds, 1_800);
        assert_eq!(luis.inactive_seconds, 1_800);
    }

    #[test]
    fn test_json_shape() {
        let records = records();
        let views = build_report(
            &records,
            Dimension::Order,
            &ReportOptions::default(),
            &TaskNames::default(),
            &ShiftConfig::default(),
        );

        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["key"], "P1");
        assert_eq!(json[0]["recordCount"], 3);
        assert_eq!(json[0]["aggregate"]["totalWork"], 3_600);
        assert!(json[0].get("effective").is_none());
    }
}
