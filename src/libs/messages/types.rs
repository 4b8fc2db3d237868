//! The catalogue of user-facing messages.
//!
//! Variants are grouped by the command or subsystem that emits them. Text
//! lives in [`display`](super::display); parameters carry the dynamic parts.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION ===
    ConfigSaved,
    ConfigReadFailed(String),
    ConfigModuleShift,
    ConfigModuleTasks,
    ConfigModuleRecords,
    PromptSelectModules,
    PromptShiftStart,
    PromptShiftLength,
    PromptBreakStart,
    PromptBreakEnd,
    PromptTaskName(String),
    PromptExpectedTasks,
    PromptDurationUnit,
    PromptModuleFieldPrefix,
    InvalidTimeOfDay(String),
    BreakWindowInverted(String, String),

    // === RECORDS ===
    RecordsLoaded(usize, String),
    RecordsFiltered(usize, usize),
    NoRecordsFound,
    ModulePayloadsLoaded(usize, String),

    // === REPORT ===
    ReportHeader(String, usize),
    BreakdownHeader(String, String),
    EffectiveAt(String),

    // === RANKING AND COMPARISON ===
    RankingHeader,
    DistributionHeader,
    ComplexityHeader,
    ComparisonHeader(String),
    TaskNotFound(String),
    TaskCodeRequired,
    MultiOperatorTask(usize),
    SingleOperatorTask,

    // === MODULE STATUS ===
    StatusHeader,

    // === DAILY SUMMARY ===
    SummaryHeader(String),
    SummaryTotal,
    SummaryAverage,
    UndatedRecords(usize),

    // === SHIFT ===
    ShiftHeader(String),
    ShiftBeforeStart,
    ShiftFinished,

    // === EXPORT ===
    ExportCompleted(String),
}
