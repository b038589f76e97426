//! Contact form front end

pub mod prompt;

pub use prompt::{ContactPrompt, PromptError, PromptOutcome};
