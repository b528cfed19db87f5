use chrono::{Duration, TimeDelta};
use envbadge_core::Timestamp;
use envbadge_detector::{DetectorChain, EnvironmentDetector, EnvironmentTable, Lane};
use envbadge_ports::ConfigError;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use super::types::{ProfileConfig, WatchConfigFile};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("No enabled profiles in config")]
    NoEnabledProfiles,
    #[error("Poll interval must be greater than zero")]
    InvalidInterval,
    #[error("Duplicate profile name: {0}")]
    DuplicateProfile(String),
    #[error("Invalid table in profile '{profile}': {source}")]
    Table {
        profile: String,
        #[source]
        source: ConfigError,
    },
}

/// Load watch configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<WatchConfigFile, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<WatchConfigFile, LoadError> {
    let config: WatchConfigFile = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<WatchConfigFile, LoadError> {
    let default_config = include_str!("default_config.json");
    load_config_from_str(default_config)
}

fn millis(ms: u64, what: &str) -> Result<Duration, ConfigError> {
    i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(|| ConfigError::InvalidDuration(format!("{} of {}ms is out of range", what, ms)))
}

impl WatchConfigFile {
    /// Get only enabled profiles, in priority order
    pub fn enabled_profiles(&self) -> Vec<&ProfileConfig> {
        self.profiles.iter().filter(|p| p.enabled).collect()
    }

    /// Get a specific profile by name
    pub fn get_profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.poll_interval_ms == 0 {
            return Err(LoadError::InvalidInterval);
        }
        let mut names = HashSet::new();
        for profile in &self.profiles {
            if !names.insert(profile.name.as_str()) {
                return Err(LoadError::DuplicateProfile(profile.name.clone()));
            }
        }
        if self.enabled_profiles().is_empty() {
            return Err(LoadError::NoEnabledProfiles);
        }
        Ok(())
    }

    /// Build one detector per enabled profile, chained by priority
    pub fn build_chain(&self, started_at: Timestamp) -> Result<DetectorChain, LoadError> {
        self.validate()?;

        let mut lanes = Vec::new();
        for profile in self.enabled_profiles() {
            let table_error = |source: ConfigError| LoadError::Table {
                profile: profile.name.clone(),
                source,
            };
            let table =
                EnvironmentTable::new(profile.strategy.clone(), profile.environments.clone())
                    .map_err(table_error)?;
            let detector = EnvironmentDetector::new(
                table,
                millis(self.initial_suppress_ms, "initial suppression").map_err(table_error)?,
                millis(self.change_suppress_ms, "change suppression").map_err(table_error)?,
                started_at,
            )
            .map_err(table_error)?;
            log::info!(
                "Profile '{}' loaded: {} environments",
                profile.name,
                profile.environments.len()
            );
            lanes.push(Lane::new(profile.name.clone(), detector));
        }

        DetectorChain::new(lanes).map_err(|source| LoadError::Table {
            profile: "<chain>".to_string(),
            source,
        })
    }
}
