use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_LOCALE_FILE;

pub const CONFIG_FILE_NAME: &str = ".transdiffrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File name of the locale files to report on, matched against the end
    /// of each path in the diff.
    #[serde(default = "default_locale_file")]
    pub locale_file: String,
}

fn default_locale_file() -> String {
    DEFAULT_LOCALE_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_file: default_locale_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The locale file must be a bare, non-empty file name.
    pub fn validate(&self) -> Result<()> {
        validate_locale_file(&self.locale_file)
    }
}

pub fn validate_locale_file(locale_file: &str) -> Result<()> {
    if locale_file.trim().is_empty() {
        bail!("Invalid 'localeFile': the file name must not be empty");
    }
    if locale_file.contains('/') {
        bail!(
            "Invalid 'localeFile': \"{}\" must be a file name, not a path",
            locale_file
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
