//! Page environment port
//!
//! Ambient values read once per submission and attached to the lead.

/// Where the lead was captured and by what client
pub trait PageEnvironment: Send + Sync {
    /// Location of the referring page (sent as `source`)
    fn page_location(&self) -> String;

    /// Client identifier string (sent as `user_agent`)
    fn client_identifier(&self) -> String;
}
