//! Infrastructure layer for shmixy
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod environment;
pub mod relay;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FilePageConfig, FileRelayConfig,
};
pub use environment::{DEFAULT_PAGE_LOCATION, StaticPageEnvironment, default_client_identifier};
pub use relay::{DEFAULT_RELAY_ENDPOINT, HttpLeadRelay};
