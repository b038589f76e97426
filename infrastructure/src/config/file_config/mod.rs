//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at the
//! wiring boundary.

mod logging;
mod output;
mod page;
mod relay;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use page::FilePageConfig;
pub use relay::FileRelayConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("relay.endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("relay.subject cannot be empty")]
    EmptySubject,

    #[error("page.location cannot be empty")]
    EmptyLocation,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Lead relay settings
    pub relay: FileRelayConfig,
    /// Page environment settings
    pub page: FilePageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoint = self.relay.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigValidationError::InvalidEndpoint(
                self.relay.endpoint.clone(),
            ));
        }

        if self.relay.subject.trim().is_empty() {
            return Err(ConfigValidationError::EmptySubject);
        }

        if self.page.location.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLocation);
        }

        Ok(())
    }
}
