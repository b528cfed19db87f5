use envbadge_core::{EnvironmentEntry, MatchStrategy};
use serde::{Deserialize, Serialize};

fn default_initial_suppress_ms() -> u64 {
    3000
}

fn default_change_suppress_ms() -> u64 {
    5000
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_enabled() -> bool {
    true
}

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfigFile {
    /// Cool-down after start (page load / login redirect)
    #[serde(default = "default_initial_suppress_ms")]
    pub initial_suppress_ms: u64,
    /// Cool-down after every environment change (SPA navigation)
    #[serde(default = "default_change_suppress_ms")]
    pub change_suppress_ms: u64,
    /// Poll cadence
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Detection profiles in priority order (first = highest)
    pub profiles: Vec<ProfileConfig>,
}

/// One detection strategy and its lookup table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Lane name, also used to bind a signal source
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: MatchStrategy,
    /// Kept as a list so order and duplicates survive parsing
    pub environments: Vec<EnvironmentEntry>,
}
