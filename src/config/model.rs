//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application runs without a config file.

use serde::{Deserialize, Serialize};

use crate::dialog::OverlapPolicy;
use crate::todo::TaskFromFetch;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dialog: DialogSettings,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Tasks to start the list with.
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskFromFetch>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dialog: DialogSettings::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            tasks: default_tasks(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogSettings {
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Dialog popup width as a percentage of the terminal width.
    #[serde(default = "default_popup_width")]
    pub popup_width_percent: u16,
    #[serde(default = "default_true")]
    pub show_wizard_bar: bool,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            popup_width_percent: default_popup_width(),
            show_wizard_bar: true,
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_tasks() -> Vec<TaskFromFetch> {
    vec![
        TaskFromFetch {
            id: "welcome".into(),
            name: "Press a to add a task".into(),
            description: String::new(),
            done: false,
        },
        TaskFromFetch {
            id: "delete".into(),
            name: "Press d to delete one (you will be asked first)".into(),
            description: String::new(),
            done: false,
        },
    ]
}

fn default_popup_width() -> u16 {
    50
}

fn default_tick_ms() -> u64 {
    250
}

fn default_log_dir() -> String {
    "~/.local/share/vtkit/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}
