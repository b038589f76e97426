//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod lead_relay;
pub mod notifier;
pub mod page_environment;
