use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
            Message::ConfigModuleShift => "Shift settings".to_string(),
            Message::ConfigModuleTasks => "Task catalogue".to_string(),
            Message::ConfigModuleRecords => "Record decoding".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptShiftStart => "Shift start (HH:MM)".to_string(),
            Message::PromptShiftLength => "Shift length in seconds".to_string(),
            Message::PromptBreakStart => "Break start (HH:MM)".to_string(),
            Message::PromptBreakEnd => "Break end (HH:MM)".to_string(),
            Message::PromptTaskName(code) => format!("Name for task {}", code),
            Message::PromptExpectedTasks => "Tasks every module is expected to pass through".to_string(),
            Message::PromptDurationUnit => "Unit of the duration fields in record files".to_string(),
            Message::PromptModuleFieldPrefix => "Prefix of per-task time fields in module payloads".to_string(),
            Message::InvalidTimeOfDay(value) => format!("Invalid time of day: '{}'. Expected HH:MM", value),
            Message::BreakWindowInverted(start, end) => {
                format!("Break window {}-{} ends before it starts; no break will be deducted", start, end)
            }

            // === RECORDS ===
            Message::RecordsLoaded(count, path) => format!("Loaded {} record(s) from {}", count, path),
            Message::RecordsFiltered(kept, total) => format!("{} of {} record(s) match the filter", kept, total),
            Message::NoRecordsFound => "No records found for the selected filter".to_string(),
            Message::ModulePayloadsLoaded(count, path) => format!("Loaded {} module payload(s) from {}", count, path),

            // === REPORT ===
            Message::ReportHeader(dimension, count) => format!("Time by {} ({} group(s))", dimension, count),
            Message::BreakdownHeader(label, dimension) => format!("{} by {}", label, dimension),
            Message::EffectiveAt(now) => format!("Effective shift time at {}", now),

            // === RANKING AND COMPARISON ===
            Message::RankingHeader => "Operators by average time per module".to_string(),
            Message::DistributionHeader => "Time distribution by task".to_string(),
            Message::ComplexityHeader => "Orders by complexity".to_string(),
            Message::ComparisonHeader(task) => format!("Operators on task {}", task),
            Message::TaskNotFound(code) => format!("No records found for task {}", code),
            Message::TaskCodeRequired => "A task code is required".to_string(),
            Message::MultiOperatorTask(count) => format!("Task shared by {} operators", count),
            Message::SingleOperatorTask => "Task worked by a single operator".to_string(),

            // === MODULE STATUS ===
            Message::StatusHeader => "Module status".to_string(),

            // === DAILY SUMMARY ===
            Message::SummaryHeader(range) => format!("Working hours for {}", range),
            Message::SummaryTotal => "TOTAL".to_string(),
            Message::SummaryAverage => "AVERAGE".to_string(),
            Message::UndatedRecords(count) => format!("{} record(s) without a valid date were left out", count),

            // === SHIFT ===
            Message::ShiftHeader(now) => format!("Shift at {}", now),
            Message::ShiftBeforeStart => "The shift has not started yet".to_string(),
            Message::ShiftFinished => "The shift is over".to_string(),

            // === EXPORT ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
        };
        write!(f, "{}", text)
    }
}
