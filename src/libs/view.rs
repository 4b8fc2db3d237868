use crate::libs::effective::EffectiveTime;
use crate::libs::formatter::{format_percent, format_seconds, FormattedGroup};
use crate::libs::messages::Message;
use crate::libs::normalizer::TaskNames;
use crate::libs::ranking::{OperatorComparison, OperatorRanking, OrderComplexity, TaskShare};
use crate::libs::report::{Breakdown, GroupView};
use crate::libs::status::ModuleProgress;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn groups(views: &[GroupView]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "KEY", "NAME", "RECORDS", "OPEN", "WORK", "WAIT", "INTER-OP", "SINCE ORDER", "UNTIL DUE", "CYCLE",
            "OPERATORS", "TASKS", "ORDERS", "MODULES", "PER MODULE", "LAST EVENT"
        ]);
        for view in views {
            let row = FormattedGroup::from(view);
            table.add_row(row![
                row.key,
                row.label,
                row.records,
                row.open,
                row.total_work,
                row.wait_before_resource,
                row.inter_operation,
                row.since_order_placed,
                row.until_due,
                row.total_cycle,
                row.operators,
                row.tasks,
                row.orders,
                row.modules,
                row.time_per_module,
                row.last_event
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breakdown(breakdown: &Breakdown) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![breakdown.dimension.to_string().to_uppercase(), "NAME", "RECORDS", "WORK", "CYCLE"]);
        for sub in &breakdown.subgroups {
            table.add_row(row![
                sub.key,
                sub.display_label,
                sub.record_count,
                format_seconds(sub.aggregate.total_work),
                format_seconds(sub.aggregate.total_cycle)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Effective shift figures, one row per labelled entry.
    pub fn effective(rows: &[(String, EffectiveTime)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ELAPSED", "BREAK", "EFFECTIVE", "ACTIVE", "INACTIVE", "UTILIZATION"]);
        for (label, time) in rows {
            table.add_row(row![
                label,
                format_seconds(time.raw_elapsed),
                format_seconds(time.break_overlap),
                format_seconds(time.effective_elapsed),
                format_seconds(time.active_seconds),
                format_seconds(time.inactive_seconds),
                format!("{}%", time.utilization_percent)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn ranking(rows: &[OperatorRanking]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "OPERATOR", "WORK", "MODULES", "PER MODULE"]);
        for row in rows {
            table.add_row(row![
                row.rank,
                row.operator,
                format_seconds(row.total_work),
                row.module_count,
                format_seconds(row.avg_time_per_module.round() as u64)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn distribution(shares: &[TaskShare]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "NAME", "WORK", "SHARE"]);
        for share in shares {
            table.add_row(row![
                share.task,
                share.label,
                format_seconds(share.total_work),
                format_percent(share.share_percent)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn complexity(rows: &[OrderComplexity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ORDER", "SCORE", "TASKS", "OPERATORS", "MODULES"]);
        for row in rows {
            table.add_row(row![row.order, row.score, row.task_count, row.operator_count, row.module_count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn comparison(comparison: &OperatorComparison) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["OPERATOR", "WORK", "MODULES", "ORDERS"]);
        for row in &comparison.rows {
            table.add_row(row![row.operator, format_seconds(row.total_work), row.module_count, row.order_count]);
        }
        table.printstd();

        Ok(())
    }

    /// One row per module, one column per expected task, `-` where the task
    /// has not been worked.
    pub fn modules(modules: &[ModuleProgress], expected: &[String], names: &TaskNames) -> Result<()> {
        let mut table = Table::new();

        let mut header = vec!["ORDER".to_string(), "MODULE".to_string(), "STATUS".to_string()];
        header.extend(expected.iter().map(|code| names.label(code).to_string()));
        table.add_row(header.into());

        for module in modules {
            let mut cells = vec![module.order.clone(), module.module.clone(), module.status.to_string()];
            cells.extend(expected.iter().map(|code| match module.times.get(code) {
                Some(seconds) => format_seconds(seconds),
                None => "-".to_string(),
            }));
            table.add_row(cells.into());
        }
        table.printstd();

        Ok(())
    }

    pub fn sum(summary: &(Vec<(NaiveDate, String)>, String, String)) -> Result<()> {
        let mut table = Table::new();
        let (daily, total, average) = summary;

        table.add_row(row!["DATE", "HOURS"]);
        for (date, hours) in daily {
            table.add_row(row![date.format("%d.%m.%Y"), hours]);
        }
        table.add_row(row![Message::SummaryAverage, average]);
        table.add_row(row![Message::SummaryTotal, total]);
        table.printstd();

        Ok(())
    }
}
