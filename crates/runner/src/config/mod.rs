pub mod loader;
pub mod types;

pub use loader::{LoadError, load_config, load_config_from_str, load_default_config};
pub use types::{ProfileConfig, WatchConfigFile};
