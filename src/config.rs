/*
 * SPDX-FileCopyrightText: 2024 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR WL-1.0
 */

use anyhow::{Context, Result, anyhow};
use connector::{RequestConfig, TokenStorage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, EnumIter, EnumString, Display, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConfigKey {
    Server,
    AccessToken,
}

pub type Config = BTreeMap<ConfigKey, Option<String>>;

pub fn get_config_file() -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().context("Could not find configuration directory")?;
    config_dir.push("work21");
    config_dir.push("config.toml");
    Ok(config_dir)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(ConfigKey::iter().map(|key| (key, None)).collect());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(config_dir) = path.parent() {
        fs::create_dir_all(config_dir).context("Failed to create configuration directory")?;
    }

    let contents = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write configuration file {}", path.display()))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_file()?)
}

pub fn get_value(key: ConfigKey) -> Result<Option<String>> {
    Ok(load_config()?
        .get(&key)
        .cloned()
        .flatten()
        .filter(|v| !v.is_empty()))
}

pub fn set_value(key: ConfigKey, value: Option<String>) -> Result<()> {
    let path = get_config_file()?;
    let mut config = load_config_from(&path)?;
    config.insert(key, value);
    save_config_to(&path, &config)
}

/// Backs `work21 config <key> [value]`: prints the value when `value` is
/// `None`, stores it otherwise.
pub fn set_get_value_from_string(key: &str, value: Option<String>) -> Result<()> {
    let config_key: ConfigKey = key.parse().map_err(|_| {
        let valid = ConfigKey::iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("Invalid key: {}. Valid keys are: {}", key, valid)
    })?;

    match value {
        Some(value) => {
            set_value(config_key, Some(value.clone()))?;

            if config_key == ConfigKey::AccessToken {
                println!("{} set", config_key);
            } else {
                println!("{} set to \"{}\"", config_key, value);
            }
        }
        None => match get_value(config_key)? {
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        },
    }

    Ok(())
}

/// Token storage backed by the `access_token` entry of the config file.
/// The file is re-read on every lookup, so logins from another shell are
/// picked up without restarting.
#[derive(Debug, Clone)]
pub struct ConfigTokenStorage {
    path: PathBuf,
}

impl ConfigTokenStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStorage for ConfigTokenStorage {
    fn access_token(&self) -> Option<String> {
        match load_config_from(&self.path) {
            Ok(config) => config
                .get(&ConfigKey::AccessToken)
                .cloned()
                .flatten()
                .filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read access token: {:#}", e);
                None
            }
        }
    }
}

/// Server URL precedence: config file, then `WORK21_API_URL`, then the
/// local development default.
pub fn get_request_config() -> Result<RequestConfig> {
    let path = get_config_file()?;
    let config = load_config_from(&path)?;
    let storage = Arc::new(ConfigTokenStorage::new(path));

    let request_config = match server_from(&config) {
        Some(server_url) => RequestConfig::new(server_url, storage),
        None => RequestConfig::from_env(storage),
    };

    tracing::debug!("Using server {}", request_config.server_url);
    Ok(request_config)
}

fn server_from(config: &Config) -> Option<String> {
    config
        .get(&ConfigKey::Server)
        .cloned()
        .flatten()
        .filter(|v| !v.trim().is_empty())
}
