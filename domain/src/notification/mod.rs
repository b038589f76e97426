//! User-facing notifications (toasts)

use serde::{Deserialize, Serialize};

/// Visual variant of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A one-shot message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Shown when submit is blocked by the business email gate.
    pub fn business_email_required() -> Self {
        Self::destructive(
            "Please use a business email",
            "Free email providers are not allowed.",
        )
    }

    /// Shown after the relay accepted the lead.
    pub fn lead_sent() -> Self {
        Self::new("Thanks!", "Your request was sent successfully.")
    }

    /// Shown for any relay failure.
    pub fn submission_failed() -> Self {
        Self::destructive("Submission failed", "Please try again in a moment.")
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
