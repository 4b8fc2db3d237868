#[cfg(test)]
mod tests {
    use worktally::libs::grouping::group;
    use worktally::libs::normalizer::{Dimension, GroupKey, TaskNames};
    use worktally::libs::ranking::{
        compare_operators, compare_operators_in, order_complexity, rank_operators, rank_order_complexity,
        task_distribution,
    };
    use worktally::libs::record::WorkEventRecord;

    fn record(operator: &str, task: &str, order: &str, module: &str, seconds: u64) -> WorkEventRecord {
        let field = |value: &str| (!value.is_empty()).then(|| value.to_string());
        WorkEventRecord {
            operator_name: field(operator),
            task_code: field(task),
            order_number: field(order),
            module_id: field(module),
            duration_seconds: seconds,
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_by_average_time_per_module() {
        let records = vec![
            record("Ana", "01", "P1", "M1", 5),
            record("Luis", "01", "P1", "M2", 3),
            record("Marta", "01", "P1", "M3", 8),
        ];
        let operators = group(&records, Dimension::Operator);
        let ranking = rank_operators(&operators);

        let ranks: Vec<(&str, usize)> = ranking.iter().map(|r| (r.operator.as_str(), r.rank)).collect();
        assert_eq!(ranks, vec![("LUIS", 1), ("ANA", 2), ("MARTA", 3)]);
        assert_eq!(ranking[0].avg_time_per_module, 3.0);
    }

    #[test]
    fn test_operators_without_modules_rank_last() {
        let records = vec![
            record("Ana", "01", "P1", "", 1),
            record("Luis", "01", "P1", "M1", 500),
        ];
        let ranking = rank_operators(&group(&records, Dimension::Operator));

        assert_eq!(ranking[0].operator.as_str(), "LUIS");
        assert_eq!(ranking[1].operator.as_str(), "ANA");
        assert_eq!(ranking[1].module_count, 0);
        assert_eq!(ranking[1].avg_time_per_module, 0.0);
    }

    #[test]
    fn test_task_distribution_shares() {
        let records = vec![
            record("Ana", "01", "P1", "M1", 300),
            record("Ana", "03", "P1", "M1", 100),
            record("Luis", "01", "P1", "M2", 0),
        ];
        let shares = task_distribution(&records, &TaskNames::default());

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].task.as_str(), "01");
        assert_eq!(shares[0].label, "CORTE");
        assert_eq!(shares[0].share_percent, 75.0);
        assert_eq!(shares[1].label, "ARMADO");
        let total: f64 = shares.iter().map(|s| s.share_percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_task_distribution_of_zero_total() {
        let records = vec![record("Ana", "01", "P1", "M1", 0)];
        let shares = task_distribution(&records, &TaskNames::default());
        assert_eq!(shares[0].share_percent, 0.0);
    }

    #[test]
    fn test_order_complexity_formula_and_cap() {
        let small = vec![
            record("Ana", "01", "P1", "M1", 1),
            record("Luis", "02", "P1", "M2", 1),
        ];
        let groups = group(&small, Dimension::Order);
        // 2 tasks * 20 + 2 operators * 15 + 2 modules * 2
        assert_eq!(order_complexity(&groups[0]), 74);

        let big: Vec<WorkEventRecord> = (1..=6)
            .map(|n| record(&format!("op{}", n), &format!("{:02}", n), "P2", &format!("M{}", n), 1))
            .collect();
        let groups = group(&big, Dimension::Order);
        assert_eq!(order_complexity(&groups[0]), 100);
    }

    #[test]
    fn test_rank_order_complexity_descending() {
        let records = vec![
            record("Ana", "01", "P1", "M1", 1),
            record("Ana", "01", "P2", "M1", 1),
            record("Luis", "02", "P2", "M2", 1),
        ];
        let ranked = rank_order_complexity(&group(&records, Dimension::Order));

        assert_eq!(ranked[0].order.as_str(), "P2");
        assert_eq!(ranked[0].score, 74);
        assert_eq!(ranked[1].order.as_str(), "P1");
        assert_eq!(ranked[1].score, 37);
    }

    #[test]
    fn test_compare_operators_on_shared_task() {
        let records = vec![
            record("Ana", "03", "P1", "M1", 100),
            record("Luis", "03", "P2", "M2", 400),
            record("Luis", "03", "P3", "M3", 100),
            record("Marta", "04", "P1", "M1", 900),
        ];
        let comparison = compare_operators(&records, &GroupKey::new("03"));

        assert!(comparison.multi_operator);
        assert_eq!(comparison.rows.len(), 2);
        assert_eq!(comparison.rows[0].operator.as_str(), "LUIS");
        assert_eq!(comparison.rows[0].total_work, 500);
        assert_eq!(comparison.rows[0].order_count, 2);
        assert_eq!(comparison.rows[1].operator.as_str(), "ANA");
    }

    #[test]
    fn test_single_operator_plus_unassigned_is_not_shared() {
        let records = vec![record("Ana", "05", "P1", "M1", 100), record("", "05", "P1", "M1", 50)];
        let tasks = group(&records, Dimension::Task);
        let comparison = compare_operators_in(&tasks[0]);

        assert_eq!(comparison.rows.len(), 2);
        assert!(!comparison.multi_operator);
    }

    #[test]
    fn test_compare_unknown_task_is_empty() {
        let records = vec![record("Ana", "05", "P1", "M1", 100)];
        let comparison = compare_operators(&records, &GroupKey::new("09"));
        assert!(comparison.rows.is_empty());
        assert!(!comparison.multi_operator);
    }
}
