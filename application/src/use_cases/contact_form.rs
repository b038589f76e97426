//! Contact form use case.
//!
//! [`ContactFormController`] owns the [`ContactForm`] state for one form
//! instance and drives a submission through the ports:
//!
//! 1. Gate on the stored business email verdict (no network on failure)
//! 2. Build a [`LeadSubmission`] from the fields and the [`PageEnvironment`]
//! 3. Make a single [`LeadRelay::deliver`] call
//! 4. Clear the fields on success, keep them on failure, notify either way
//!
//! The submitting flag is cleared on every exit path, including the submit
//! future being dropped while the relay call is pending.

use crate::config::SubmissionParams;
use crate::ports::lead_relay::{LeadRelay, RelayError};
use crate::ports::notifier::Notifier;
use crate::ports::page_environment::PageEnvironment;
use shmixy_domain::{
    ContactForm, DomainError, FormField, LeadSubmission, Notification, truncate,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned from [`ContactFormController::submit`].
///
/// These are for the caller's control flow. The user-facing side has
/// already been handled through the [`Notifier`] by the time one is returned.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error("Lead submission failed: {0}")]
    Submission(#[from] RelayError),
}

impl SubmitError {
    /// The email failed the business email gate.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::Rejected(e) if e.is_validation())
    }

    /// A previous submission was still in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            SubmitError::Rejected(DomainError::SubmissionInFlight)
        )
    }
}

/// Controller for a single contact form instance.
pub struct ContactFormController {
    relay: Arc<dyn LeadRelay>,
    notifier: Arc<dyn Notifier>,
    environment: Arc<dyn PageEnvironment>,
    params: SubmissionParams,
    form: Mutex<ContactForm>,
}

impl ContactFormController {
    pub fn new(
        relay: Arc<dyn LeadRelay>,
        notifier: Arc<dyn Notifier>,
        environment: Arc<dyn PageEnvironment>,
    ) -> Self {
        Self {
            relay,
            notifier,
            environment,
            params: SubmissionParams::default(),
            form: Mutex::new(ContactForm::new()),
        }
    }

    pub fn with_params(mut self, params: SubmissionParams) -> Self {
        self.params = params;
        self
    }

    // ==================== Field State ====================

    /// Field change handler. Email changes recompute the verdict.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let mut form = lock_form(&self.form);
        form.update(field, value);
        if field == FormField::Email {
            debug!(accepted = form.email_accepted(), "Email verdict recomputed");
        }
    }

    /// Copy of the current form state.
    pub fn snapshot(&self) -> ContactForm {
        lock_form(&self.form).clone()
    }

    pub fn can_submit(&self) -> bool {
        lock_form(&self.form).can_submit()
    }

    pub fn is_submitting(&self) -> bool {
        lock_form(&self.form).is_submitting()
    }

    pub fn email_warning(&self) -> Option<&'static str> {
        lock_form(&self.form).email_warning()
    }

    // ==================== Submission ====================

    /// Submit the form.
    ///
    /// - In flight: returns [`DomainError::SubmissionInFlight`], emits nothing
    /// - Email rejected: validation notification, no relay call
    /// - Relay ok: fields cleared, success notification
    /// - Relay error: fields kept, failure notification
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let fields = {
            let mut form = lock_form(&self.form);
            match form.begin_submission() {
                Ok(fields) => fields,
                Err(DomainError::SubmissionInFlight) => {
                    debug!("Submit ignored, a submission is already in flight");
                    return Err(DomainError::SubmissionInFlight.into());
                }
                Err(e) => {
                    info!("Submit blocked: email is not a business address");
                    self.notifier.notify(Notification::business_email_required());
                    return Err(e.into());
                }
            }
        };
        let guard = SubmittingGuard::new(&self.form);

        let lead = LeadSubmission::new(
            self.params.subject.clone(),
            fields,
            self.environment.page_location(),
            self.environment.client_identifier(),
        );

        info!(
            company = %truncate(&lead.company, 60),
            source = %lead.source,
            "Submitting lead"
        );

        match self.relay.deliver(&lead).await {
            Ok(()) => {
                guard.finish(true);
                info!("Lead delivered");
                self.notifier.notify(Notification::lead_sent());
                Ok(())
            }
            Err(e) => {
                guard.finish(false);
                warn!("Lead submission failed: {}", e);
                self.notifier.notify(Notification::submission_failed());
                Err(e.into())
            }
        }
    }
}

fn lock_form(form: &Mutex<ContactForm>) -> MutexGuard<'_, ContactForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the form to `Idle` when dropped without an explicit outcome.
struct SubmittingGuard<'a> {
    form: &'a Mutex<ContactForm>,
    finished: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn new(form: &'a Mutex<ContactForm>) -> Self {
        Self {
            form,
            finished: false,
        }
    }

    fn finish(mut self, delivered: bool) {
        lock_form(self.form).finish_submission(delivered);
        self.finished = true;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            debug!("Submission dropped before completion, returning to idle");
            lock_form(self.form).finish_submission(false);
        }
    }
}
