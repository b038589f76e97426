//! Presentation layer for shmixy
//!
//! This crate contains CLI definitions, the landing page renderer,
//! console toasts, and the interactive contact form.

pub mod cli;
pub mod form;
pub mod output;
pub mod page;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{CheckArgs, Cli, Command, SubmitArgs};
pub use form::{ContactPrompt, PromptError, PromptOutcome};
pub use output::{CheckedEmail, ConsoleFormatter, ConsoleToaster, set_color_enabled};
pub use page::LandingPage;
pub use progress::SendingSpinner;
