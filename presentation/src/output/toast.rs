//! Console toasts
//!
//! [`ConsoleToaster`] implements the [`Notifier`] port by printing each
//! notification as a short block:
//!
//! ```text
//! [ok] Thanks!
//!      Your request was sent successfully.
//! ```

use colored::Colorize;
use shmixy_application::Notifier;
use shmixy_domain::{Notification, NotificationVariant};

/// Prints notifications to stdout
pub struct ConsoleToaster;

impl ConsoleToaster {
    pub fn new() -> Self {
        Self
    }

    /// Format a notification as printed by [`ConsoleToaster`]
    pub fn format(notification: &Notification) -> String {
        let (marker, title) = match notification.variant {
            NotificationVariant::Default => {
                ("[ok]".green().bold(), notification.title.green().bold())
            }
            NotificationVariant::Destructive => {
                ("[!!]".red().bold(), notification.title.red().bold())
            }
        };
        format!(
            "{} {}\n     {}",
            marker, title, notification.description
        )
    }
}

impl Default for ConsoleToaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleToaster {
    fn notify(&self, notification: Notification) {
        println!();
        println!("{}", Self::format(&notification));
        println!();
    }
}
