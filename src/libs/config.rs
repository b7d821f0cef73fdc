//! Application configuration.
//!
//! The configuration is a small JSON file (`config.json`) kept in the
//! platform data directory next to the default task file. Every section is
//! optional; a missing file or section means "use the defaults".
//!
//! ## Sections
//!
//! - **storage**: where the task list lives
//! - **view**: how task tables are rendered
//!
//! ## Task file resolution
//!
//! The task file is picked from the first source that provides it:
//!
//! 1. the `--file` command-line option
//! 2. the `ZADACHI_FILE` environment variable (a `.env` file works too)
//! 3. `storage.tasks_file` in `config.json`
//! 4. `tasks.json` in the data directory
//!
//! ```rust,no_run
//! use zadachi::libs::config::Config;
//!
//! let config = Config::read()?;
//! let path = config.tasks_file(None)?;
//! println!("{}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::tasks::TASKS_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the task file location.
pub const TASKS_FILE_ENV: &str = "ZADACHI_FILE";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Path of the JSON file holding the task list.
    pub tasks_file: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Whether task tables include the description column.
    pub show_description: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { show_description: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Reads `config.json`, returning the defaults when it does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(config_file_path: &Path) -> Result<Config> {
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, config_file_path: &Path) -> Result<()> {
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the task file location. `cli_override` wins over everything else.
    pub fn tasks_file(&self, cli_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path);
        }
        if let Some(path) = env::var_os(TASKS_FILE_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(storage) = &self.storage {
            return Ok(storage.tasks_file.clone());
        }
        Ok(DataStorage::new().get_path(TASKS_FILE_NAME)?)
    }

    pub fn view(&self) -> ViewConfig {
        self.view.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. The current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: Message::ConfigModuleView.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = match &config.storage {
                        Some(storage) => storage.tasks_file.clone(),
                        None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
                    };
                    msg_print!(Message::ConfigModuleStorage);
                    let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTasksFile.to_string())
                        .default(default.display().to_string())
                        .interact_text()?;
                    config.storage = Some(StorageConfig {
                        tasks_file: PathBuf::from(tasks_file.trim()),
                    });
                }
                "view" => {
                    let default = config.view();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        show_description: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowDescription.to_string())
                            .default(default.show_description)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
