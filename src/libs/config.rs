//! Configuration for worktally.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing section, or a
//! missing file, means the built-in defaults apply.
//!
//! ```json
//! {
//!   "shift": { "start": "06:30", "length_seconds": 27000, "break_start": "09:30", "break_end": "10:00" },
//!   "tasks": { "names": { "01": "CORTE", "02": "PRE-ARMADO" }, "expected": ["01", "02"] },
//!   "records": { "duration_unit": "seconds", "module_field_prefix": "TiempoAcumulado" }
//! }
//! ```
//!
//! `worktally init` walks through the sections interactively and saves the
//! result.

use super::data_storage::DataStorage;
use crate::libs::effective::ShiftConfig;
use crate::libs::error::WorktallyError;
use crate::libs::messages::Message;
use crate::libs::normalizer::TaskNames;
use crate::libs::record::{parse_time, DurationUnit};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Field-name prefix of per-task accumulated times in module payloads.
pub const DEFAULT_MODULE_FIELD_PREFIX: &str = "TiempoAcumulado";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskConfig {
    /// Code to display name.
    pub names: TaskNames,
    /// Codes every module passes through, in production order.
    pub expected: Vec<String>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        let names = TaskNames::default();
        let expected = names.codes().map(str::to_string).collect();
        TaskConfig { names, expected }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecordsConfig {
    pub duration_unit: DurationUnit,
    pub module_field_prefix: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        RecordsConfig {
            duration_unit: DurationUnit::Seconds,
            module_field_prefix: DEFAULT_MODULE_FIELD_PREFIX.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<RecordsConfig>,
}

impl Config {
    /// Reads the saved configuration, or the defaults when nothing is saved.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The shift window in effect. An inverted break window is reported
    /// here, once, for every command that reads the shift.
    pub fn shift(&self) -> ShiftConfig {
        let shift = self.shift.unwrap_or_default();
        if shift.break_end < shift.break_start {
            msg_warning!(Message::BreakWindowInverted(
                shift.break_start.format("%H:%M").to_string(),
                shift.break_end.format("%H:%M").to_string()
            ));
        }
        shift
    }

    pub fn tasks(&self) -> TaskConfig {
        self.tasks.clone().unwrap_or_default()
    }

    pub fn records(&self) -> RecordsConfig {
        self.records.clone().unwrap_or_default()
    }

    /// Interactive setup: pick the sections to edit, answer their prompts.
    /// Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(e) => {
                msg_warning!(Message::ConfigReadFailed(e.to_string()));
                Config::default()
            }
        };

        let node_descriptions = [
            ConfigModule {
                key: "shift".to_string(),
                name: Message::ConfigModuleShift.to_string(),
            },
            ConfigModule {
                key: "tasks".to_string(),
                name: Message::ConfigModuleTasks.to_string(),
            },
            ConfigModule {
                key: "records".to_string(),
                name: Message::ConfigModuleRecords.to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "shift" => {
                    let default = config.shift.unwrap_or_default();
                    msg_print!(Message::ConfigModuleShift);
                    config.shift = Some(ShiftConfig {
                        start: prompt_time(Message::PromptShiftStart, default.start)?,
                        length_seconds: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShiftLength.to_string())
                            .default(default.length_seconds)
                            .interact_text()?,
                        break_start: prompt_time(Message::PromptBreakStart, default.break_start)?,
                        break_end: prompt_time(Message::PromptBreakEnd, default.break_end)?,
                    });
                }

                "tasks" => {
                    let default = config.tasks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTasks);
                    config.tasks = Some(init_tasks(&default)?);
                }

                "records" => {
                    let default = config.records.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleRecords);
                    let units = [DurationUnit::Seconds, DurationUnit::Milliseconds, DurationUnit::Auto];
                    let labels = ["seconds", "milliseconds", "auto (values above 1e9 are milliseconds)"];
                    let current = units.iter().position(|u| *u == default.duration_unit).unwrap_or(0);
                    let unit = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDurationUnit.to_string())
                        .items(&labels)
                        .default(current)
                        .interact()?;
                    config.records = Some(RecordsConfig {
                        duration_unit: units[unit],
                        module_field_prefix: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptModuleFieldPrefix.to_string())
                            .default(default.module_field_prefix)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn init_tasks(default: &TaskConfig) -> Result<TaskConfig> {
    let mut names = BTreeMap::new();
    for code in default.names.codes() {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName(code.to_string()).to_string())
            .default(default.names.label(code).to_string())
            .interact_text()?;
        names.insert(code.to_string(), name);
    }
    let names = TaskNames::new(names);

    let codes: Vec<String> = names.codes().map(str::to_string).collect();
    let items: Vec<String> = codes.iter().map(|code| format!("{} {}", code, names.label(code))).collect();
    let checked: Vec<bool> = codes.iter().map(|code| default.expected.contains(code)).collect();
    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExpectedTasks.to_string())
        .items(&items)
        .defaults(&checked)
        .interact()?;

    let expected = selected.into_iter().map(|i| codes[i].clone()).collect();
    Ok(TaskConfig { names, expected })
}

fn prompt_time(prompt: Message, default: NaiveTime) -> Result<NaiveTime> {
    let raw = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format("%H:%M").to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_time(input)
                .map(|_| ())
                .ok_or_else(|| Message::InvalidTimeOfDay(input.clone()).to_string())
        })
        .interact_text()?;

    Ok(parse_time(&raw).ok_or(WorktallyError::InvalidTime(raw))?)
}
