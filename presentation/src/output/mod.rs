//! Console output: formatted results and toasts

pub mod console;
pub mod toast;

pub use console::{CheckedEmail, ConsoleFormatter, set_color_enabled};
pub use toast::ConsoleToaster;
