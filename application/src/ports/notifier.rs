//! Notification port
//!
//! Toast-style messages surfaced to the user after a submit attempt.

use shmixy_domain::Notification;

/// Sink for user-facing notifications
///
/// Presentation is entirely the implementation's concern.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// No-op notifier for tests and headless use
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn notify(&self, _notification: Notification) {}
}
