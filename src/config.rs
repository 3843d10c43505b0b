//! Application Configuration
//!
//! Storage slot names and log verbosity, built once at startup.

use log::LevelFilter;

pub const DEFAULT_TASKS_KEY: &str = "tidy.tasks";
pub const DEFAULT_THEME_KEY: &str = "tidy.theme";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage slot holding the task list
    pub tasks_key: String,
    /// localStorage slot holding the theme
    pub theme_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
