//! Page configuration from TOML (`[page]` section)

use crate::environment::{DEFAULT_PAGE_LOCATION, StaticPageEnvironment, default_client_identifier};
use serde::{Deserialize, Serialize};

/// Raw page configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePageConfig {
    /// Page location sent as the lead `source`
    pub location: String,
    /// Client identifier sent as `user_agent` (defaults to the build identifier)
    pub user_agent: Option<String>,
}

impl Default for FilePageConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_PAGE_LOCATION.to_string(),
            user_agent: None,
        }
    }
}

impl FilePageConfig {
    pub fn client_identifier(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(default_client_identifier)
    }

    pub fn environment(&self) -> StaticPageEnvironment {
        StaticPageEnvironment::new(self.location.clone(), self.client_identifier())
    }
}
