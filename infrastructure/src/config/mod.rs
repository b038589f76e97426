//! Configuration file loading for shmixy
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SHMIXY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./shmixy.toml` or `./.shmixy.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/shmixy/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FilePageConfig,
    FileRelayConfig,
};
pub use loader::ConfigLoader;
