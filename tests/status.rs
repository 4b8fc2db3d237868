#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::TempDir;
    use worktally::libs::normalizer::UNASSIGNED_ORDER;
    use worktally::libs::config::TaskConfig;
    use worktally::libs::record::{parse_records, WorkEventRecord};
    use worktally::libs::status::{
        classify, load_module_payloads, module_progress, ModuleSnapshot, ModuleStatus, ModuleTimes,
    };

    const PREFIX: &str = "TiempoAcumulado";

    fn expected() -> Vec<String> {
        (1..=10).map(|n| format!("{:02}", n)).collect()
    }

    fn durations(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(code, secs)| (code.to_string(), *secs)).collect()
    }

    #[test]
    fn test_present_zero_and_absent_fields() {
        let payload = json!({
            "orderNumber": "P1",
            "moduleId": "M1",
            "TiempoAcumulado01": 120,
            "TiempoAcumulado02": 0
        });
        let snapshot = ModuleSnapshot::from_payload(&payload, PREFIX);

        assert_eq!(snapshot.order.as_deref(), Some("P1"));
        assert_eq!(snapshot.module.as_deref(), Some("M1"));
        assert_eq!(snapshot.times.durations().len(), 2);
        assert_eq!(snapshot.times.classify(&expected()), ModuleStatus::Partial);
    }

    #[test]
    fn test_classify_three_states() {
        let expected = expected();
        assert_eq!(classify(&expected, &durations(&[("01", 5), ("02", 7)])), ModuleStatus::Complete);
        assert_eq!(classify(&expected, &durations(&[("01", 5), ("02", 0)])), ModuleStatus::Partial);
        assert_eq!(classify(&expected, &durations(&[("01", 0), ("02", 0)])), ModuleStatus::None);
        assert_eq!(classify(&expected, &durations(&[])), ModuleStatus::None);
    }

    #[test]
    fn test_unexpected_codes_do_not_participate() {
        let expected = vec!["01".to_string(), "02".to_string()];
        let times = durations(&[("01", 10), ("02", 10), ("11", 0)]);
        assert_eq!(classify(&expected, &times), ModuleStatus::Complete);
    }

    #[test]
    fn test_null_and_garbage_fields_are_present_with_zero() {
        let payload = json!({
            "TiempoAcumulado01": 60,
            "TiempoAcumulado02": null,
            "TiempoAcumulado03": "n/a",
            "TiempoAcumulado": 999,
            "Other": 5
        });
        let times = ModuleTimes::from_payload(&payload, PREFIX);

        assert_eq!(times.durations(), &durations(&[("01", 60), ("02", 0), ("03", 0)]));
        assert_eq!(times.classify(&expected()), ModuleStatus::Partial);
    }

    #[test]
    fn test_status_only_moves_forward_as_time_accumulates() {
        let expected = vec!["01".to_string(), "02".to_string(), "03".to_string()];
        let mut times = ModuleTimes::new();
        for code in &expected {
            times.record(code.as_str(), 0);
        }
        assert_eq!(times.classify(&expected), ModuleStatus::None);

        times.record("01", 30);
        assert_eq!(times.classify(&expected), ModuleStatus::Partial);
        times.record("02", 30);
        assert_eq!(times.classify(&expected), ModuleStatus::Partial);
        times.record("03", 30);
        assert_eq!(times.classify(&expected), ModuleStatus::Complete);
    }

    #[test]
    fn test_status_display_and_serialization() {
        assert_eq!(ModuleStatus::Complete.to_string(), "COMPLETE");
        assert_eq!(serde_json::to_value(ModuleStatus::Partial).unwrap(), json!("PARTIAL"));
        assert_eq!(ModuleStatus::None.to_string(), "NONE");
    }

    #[test]
    fn test_module_progress_from_records() {
        let event = |order: Option<&str>, module: Option<&str>, task: &str, secs: u64| WorkEventRecord {
            order_number: order.map(str::to_string),
            module_id: module.map(str::to_string),
            task_code: Some(task.to_string()),
            duration_seconds: secs,
            ..Default::default()
        };
        let records = vec![
            event(Some("P1"), Some("M1"), "01", 60),
            event(Some("P1"), Some("M1"), "02", 30),
            event(Some("P1"), Some("M2"), "01", 60),
            event(None, Some("M3"), "01", 10),
            event(Some("P1"), None, "01", 10),
        ];
        let expected = vec!["01".to_string(), "02".to_string()];
        let progress = module_progress(&records, &expected);

        assert_eq!(progress.len(), 3);
        assert_eq!((progress[0].order.as_str(), progress[0].module.as_str()), ("P1", "M1"));
        assert_eq!(progress[0].status, ModuleStatus::Complete);
        assert_eq!(progress[1].module, "M2");
        assert_eq!(progress[1].status, ModuleStatus::Complete);
        assert_eq!(progress[2].order, UNASSIGNED_ORDER);
    }

    #[test]
    fn test_load_module_payloads_from_envelope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("modules.json");
        let payload = json!({
            "data": [
                { "orderNumber": 42, "moduleId": "M1", "TiempoAcumulado01": 10, "TiempoAcumulado02": 10 },
                "not a module",
                { "moduleId": "M2", "TiempoAcumulado01": 0 }
            ]
        });
        std::fs::write(&path, payload.to_string()).unwrap();

        let snapshots = load_module_payloads(&path, PREFIX).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].order.as_deref(), Some("42"));

        let progress: Vec<_> = snapshots.into_iter().map(|s| s.into_progress(&expected())).collect();
        assert_eq!(progress[0].status, ModuleStatus::Complete);
        assert_eq!(progress[1].status, ModuleStatus::None);
        assert_eq!(progress[1].order, UNASSIGNED_ORDER);
    }

    #[test]
    fn test_numeric_task_codes_match_padded_expected_codes() {
        let records = parse_records(
            r#"[
                {"orderNumber": "P1", "moduleId": "M1", "taskCode": 1, "durationSeconds": 120},
                {"orderNumber": "P1", "moduleId": "M1", "taskCode": 2, "durationSeconds": 0}
            ]"#,
        )
        .unwrap();
        let tasks = TaskConfig::default();

        let progress = module_progress(&records, &tasks.expected);
        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].status, ModuleStatus::Partial);
        assert_eq!(progress[0].times.get("01"), Some(120));
        assert_eq!(progress[0].times.get("2"), Some(0));
        assert_eq!(progress[0].times.get("03"), None);
        assert_eq!(tasks.names.label("1"), "CORTE");
    }

    #[test]
    fn test_classify_compares_canonical_codes() {
        let expected = vec!["1", "2"];
        assert_eq!(classify(&expected, &durations(&[("01", 5), ("002", 5)])), ModuleStatus::Complete);
        assert_eq!(classify(&expected, &durations(&[("1", 5), ("02", 0)])), ModuleStatus::Partial);

        let padded = vec!["01", "1"];
        assert_eq!(classify(&padded, &durations(&[("1", 5)])), ModuleStatus::Complete);
    }
}
