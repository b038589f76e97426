//! Contact form state machine

use crate::core::error::DomainError;
use crate::email::is_business_email;
use serde::{Deserialize, Serialize};

/// Inline warning shown under a non-empty email that fails the classifier.
pub const BUSINESS_EMAIL_WARNING: &str = "Please use your business email address.";

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Request consultation";

/// Submit button label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Sending...";

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Company,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Company,
        FormField::Email,
        FormField::Message,
    ];

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Company => "Company",
            FormField::Email => "Business email",
            FormField::Message => "What can we automate or build for you?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Jane Doe",
            FormField::Company => "Acme Inc.",
            FormField::Email => "you@company.com",
            FormField::Message => "Describe your processes, tools, and desired outcome...",
        }
    }

    /// Whether the field must be filled in before submitting.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Message)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Company => "company",
            FormField::Email => "email",
            FormField::Message => "message",
        };
        write!(f, "{}", name)
    }
}

/// Submission lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Snapshot of the four user-entered fields taken when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

/// Contact form state (Entity)
///
/// Holds the field values, the submitting flag, and the business email
/// verdict. The verdict is stored rather than derived on read: every email
/// change goes through [`ContactForm::update`], which recomputes it.
///
/// ```text
///   Idle --update(..)--> Idle --begin_submission()--> Submitting
///   Submitting --finish_submission(delivered)--> Idle
///   (fields cleared only if delivered)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    company: String,
    email: String,
    message: String,
    phase: FormPhase,
    email_accepted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Company => &self.company,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Current business email verdict for the email field.
    pub fn email_accepted(&self) -> bool {
        self.email_accepted
    }

    /// Apply a field change event.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Company => self.company = value,
            FormField::Email => {
                self.email = value;
                self.recompute_verdict();
            }
            FormField::Message => self.message = value,
        }
    }

    fn recompute_verdict(&mut self) {
        self.email_accepted = is_business_email(&self.email);
    }

    /// Inline warning for the email field, if one should be shown.
    pub fn email_warning(&self) -> Option<&'static str> {
        if !self.email.is_empty() && !self.email_accepted {
            Some(BUSINESS_EMAIL_WARNING)
        } else {
            None
        }
    }

    /// Submit enablement: idle and the email passes the classifier.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.email_accepted
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Move `Idle -> Submitting` and snapshot the fields.
    ///
    /// An in-flight submission takes precedence over the email gate, so a
    /// second submit while submitting never surfaces a validation error.
    pub fn begin_submission(&mut self) -> Result<LeadFields, DomainError> {
        if self.is_submitting() {
            return Err(DomainError::SubmissionInFlight);
        }
        if !self.email_accepted {
            return Err(DomainError::NotBusinessEmail(self.email.clone()));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.fields())
    }

    /// Move back to `Idle`; clear the fields when the lead was delivered.
    pub fn finish_submission(&mut self, delivered: bool) {
        if delivered {
            self.clear_fields();
        }
        self.phase = FormPhase::Idle;
    }

    pub fn fields(&self) -> LeadFields {
        LeadFields {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.company.clear();
        self.email.clear();
        self.message.clear();
        self.recompute_verdict();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update(FormField::Name, "Jane Doe");
        form.update(FormField::Company, "Acme Inc.");
        form.update(FormField::Email, email);
        form.update(FormField::Message, "Automate invoicing");
        form
    }

    #[test]
    fn test_new_form_is_idle_and_blocked() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.email_accepted());
        assert!(!form.can_submit());
        assert_eq!(form.email_warning(), None);
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_email_update_recomputes_verdict() {
        let mut form = ContactForm::new();
        form.update(FormField::Email, "jane@gmail.com");
        assert!(!form.email_accepted());
        assert_eq!(form.email_warning(), Some(BUSINESS_EMAIL_WARNING));

        form.update(FormField::Email, "jane@acme.com");
        assert!(form.email_accepted());
        assert_eq!(form.email_warning(), None);
        assert!(form.can_submit());
    }

    #[test]
    fn test_other_fields_do_not_touch_verdict() {
        let mut form = ContactForm::new();
        form.update(FormField::Email, "jane@acme.com");
        form.update(FormField::Name, "jane@gmail.com");
        form.update(FormField::Message, "");
        assert!(form.email_accepted());
    }

    #[test]
    fn test_begin_submission_rejects_free_provider() {
        let mut form = filled("jane@gmail.com");
        let err = form.begin_submission().unwrap_err();
        assert_eq!(
            err,
            DomainError::NotBusinessEmail("jane@gmail.com".to_string())
        );
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_begin_submission_snapshots_fields() {
        let mut form = filled("jane@acme.com");
        let fields = form.begin_submission().unwrap();
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.email, "jane@acme.com");
        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), SUBMITTING_LABEL);
    }

    #[test]
    fn test_second_begin_is_in_flight_even_with_bad_email() {
        let mut form = filled("jane@acme.com");
        form.begin_submission().unwrap();
        form.update(FormField::Email, "jane@gmail.com");
        assert_eq!(
            form.begin_submission().unwrap_err(),
            DomainError::SubmissionInFlight
        );
    }

    #[test]
    fn test_finish_delivered_clears_fields() {
        let mut form = filled("jane@acme.com");
        form.begin_submission().unwrap();
        form.finish_submission(true);

        assert_eq!(form.phase(), FormPhase::Idle);
        for field in FormField::ALL {
            assert!(form.get(field).is_empty());
        }
        assert!(!form.email_accepted());
        assert_eq!(form.email_warning(), None);
    }

    #[test]
    fn test_finish_failed_keeps_fields() {
        let mut form = filled("jane@acme.com");
        let before = form.fields();
        form.begin_submission().unwrap();
        form.finish_submission(false);

        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.fields(), before);
        assert!(form.can_submit());
    }

    #[test]
    fn test_email_is_kept_raw() {
        let mut form = ContactForm::new();
        form.update(FormField::Email, "  Jane@Acme.com ");
        assert!(form.email_accepted());
        assert_eq!(form.email(), "  Jane@Acme.com ");
    }

    #[test]
    fn test_missing_required() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.missing_required(),
            vec![FormField::Name, FormField::Company, FormField::Email]
        );
        form.update(FormField::Name, "Jane");
        form.update(FormField::Company, "  ");
        assert_eq!(
            form.missing_required(),
            vec![FormField::Company, FormField::Email]
        );
    }

    #[test]
    fn test_field_display_and_labels() {
        assert_eq!(FormField::Email.to_string(), "email");
        assert_eq!(FormField::Email.label(), "Business email");
        assert!(!FormField::Message.is_required());
    }
}
