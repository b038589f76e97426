//! Page environment adapter
//!
//! A terminal has no browser location or navigator, so both values come
//! from configuration and are fixed for the life of the process.

use shmixy_application::PageEnvironment;

/// Page location used when none is configured.
pub const DEFAULT_PAGE_LOCATION: &str = "https://shmixy.com/";

/// Client identifier for this build, e.g. `shmixy/0.1.0 (linux; x86_64)`.
pub fn default_client_identifier() -> String {
    format!(
        "shmixy/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// [`PageEnvironment`] backed by fixed strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPageEnvironment {
    location: String,
    client_identifier: String,
}

impl StaticPageEnvironment {
    pub fn new(location: impl Into<String>, client_identifier: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            client_identifier: client_identifier.into(),
        }
    }
}

impl Default for StaticPageEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LOCATION, default_client_identifier())
    }
}

impl PageEnvironment for StaticPageEnvironment {
    fn page_location(&self) -> String {
        self.location.clone()
    }

    fn client_identifier(&self) -> String {
        self.client_identifier.clone()
    }
}
