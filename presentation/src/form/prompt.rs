//! Interactive contact form
//!
//! Walks the user through the four fields, then submits through the
//! [`ContactFormController`].
//!
//! ```text
//! Full name (Jane Doe): Jane Doe
//! Company (Acme Inc.): Acme Inc.
//! Business email (you@company.com): jane@gmail.com
//!   Please use your business email address.
//! Business email (you@company.com): jane@acme.com
//! What can we automate or build for you? (...): Voice agents for support
//!
//! [ Request consultation ]
//! ```
//!
//! Typing `/quit` at any prompt (or closing stdin) abandons the form.

use crate::progress::SendingSpinner;
use colored::Colorize;
use shmixy_application::ContactFormController;
use shmixy_domain::{FormField, SUBMITTING_LABEL};
use std::io::{BufRead, Write};
use thiserror::Error;

const QUIT_COMMAND: &str = "/quit";

/// Errors from the interactive prompt
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The relay accepted the lead
    Submitted,
    /// The last attempt failed and the user chose not to retry
    Failed,
    /// The user quit before submitting
    Abandoned,
}

/// Terminal front end for one contact form
pub struct ContactPrompt<'a> {
    controller: &'a ContactFormController,
    show_progress: bool,
}

impl<'a> ContactPrompt<'a> {
    pub fn new(controller: &'a ContactFormController) -> Self {
        Self {
            controller,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the form until it is submitted, given up on, or abandoned
    pub async fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<PromptOutcome, PromptError> {
        for field in FormField::ALL {
            if !self.read_field(field, input, out)? {
                return Ok(PromptOutcome::Abandoned);
            }
        }

        loop {
            writeln!(
                out,
                "\n{}",
                format!("[ {} ]", self.controller.snapshot().submit_label())
                    .cyan()
                    .bold()
            )?;

            let spinner = SendingSpinner::start(SUBMITTING_LABEL, self.show_progress);
            let result = self.controller.submit().await;
            spinner.finish();

            match result {
                Ok(()) => return Ok(PromptOutcome::Submitted),
                Err(_) => {
                    if !self.confirm("Try again?", input, out)? {
                        return Ok(PromptOutcome::Failed);
                    }
                }
            }
        }
    }

    /// Prompt for one field until it holds an acceptable value.
    ///
    /// Returns `false` when the user quits.
    fn read_field<R: BufRead, W: Write>(
        &self,
        field: FormField,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool, PromptError> {
        loop {
            write!(
                out,
                "{} {}: ",
                field.label().bold(),
                format!("({})", field.placeholder()).dimmed()
            )?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                return Ok(false);
            };
            if line.trim() == QUIT_COMMAND {
                return Ok(false);
            }
            if field.is_required() && line.trim().is_empty() {
                writeln!(out, "  {}", "This field is required.".yellow())?;
                continue;
            }

            self.controller.update_field(field, line);

            if field == FormField::Email
                && let Some(warning) = self.controller.email_warning()
            {
                writeln!(out, "  {}", warning.red())?;
                continue;
            }

            return Ok(true);
        }
    }

    fn confirm<R: BufRead, W: Write>(
        &self,
        question: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool, PromptError> {
        write!(out, "{} [y/N] ", question.bold())?;
        out.flush()?;

        Ok(matches!(
            read_line(input)?.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        ))
    }
}

/// Read one line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, PromptError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shmixy_application::{LeadRelay, NoNotifier, PageEnvironment, RelayError};
    use shmixy_domain::LeadSubmission;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    struct ScriptedRelay {
        responses: Mutex<Vec<Result<(), RelayError>>>,
        calls: Mutex<Vec<LeadSubmission>>,
    }

    impl ScriptedRelay {
        fn new(mut responses: Vec<Result<(), RelayError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<LeadSubmission> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LeadRelay for ScriptedRelay {
        async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError> {
            self.calls.lock().unwrap().push(lead.clone());
            self.responses.lock().unwrap().pop().unwrap_or(Ok(()))
        }
    }

    struct TestEnvironment;

    impl PageEnvironment for TestEnvironment {
        fn page_location(&self) -> String {
            "https://shmixy.com/".to_string()
        }

        fn client_identifier(&self) -> String {
            "prompt-test".to_string()
        }
    }

    fn controller(relay: Arc<ScriptedRelay>) -> ContactFormController {
        ContactFormController::new(relay, Arc::new(NoNotifier), Arc::new(TestEnvironment))
    }

    async fn run_with(controller: &ContactFormController, script: &str) -> (PromptOutcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = ContactPrompt::new(controller)
            .with_progress(false)
            .run(&mut input, &mut out)
            .await
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_free_provider_is_reprompted() {
        let relay = Arc::new(ScriptedRelay::new(vec![Ok(())]));
        let controller = controller(relay.clone());

        let (outcome, output) = run_with(
            &controller,
            "Jane Doe\nAcme Inc.\njane@gmail.com\njane@acme.com\nVoice agents\n",
        )
        .await;

        assert_eq!(outcome, PromptOutcome::Submitted);
        assert!(output.contains("Please use your business email address."));
        let calls = relay.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "jane@acme.com");
        assert_eq!(calls[0].message, "Voice agents");
        assert!(controller.snapshot().name().is_empty());
    }

    #[tokio::test]
    async fn test_required_field_is_reprompted() {
        let relay = Arc::new(ScriptedRelay::new(vec![Ok(())]));
        let controller = controller(relay.clone());

        let (outcome, output) =
            run_with(&controller, "\nJane\nAcme\njane@acme.com\n\n").await;

        assert_eq!(outcome, PromptOutcome::Submitted);
        assert!(output.contains("This field is required."));
        assert_eq!(relay.calls()[0].name, "Jane");
        assert_eq!(relay.calls()[0].message, "");
    }

    #[tokio::test]
    async fn test_end_of_input_abandons() {
        let relay = Arc::new(ScriptedRelay::new(vec![]));
        let controller = controller(relay.clone());

        let (outcome, _) = run_with(&controller, "Jane\nAcme\n").await;

        assert_eq!(outcome, PromptOutcome::Abandoned);
        assert!(relay.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quit_command_abandons() {
        let relay = Arc::new(ScriptedRelay::new(vec![]));
        let controller = controller(relay.clone());

        let (outcome, _) = run_with(&controller, "Jane\n/quit\n").await;

        assert_eq!(outcome, PromptOutcome::Abandoned);
        assert_eq!(controller.snapshot().name(), "Jane");
    }

    #[tokio::test]
    async fn test_failure_then_retry_succeeds() {
        let relay = Arc::new(ScriptedRelay::new(vec![
            Err(RelayError::Status { status: 502 }),
            Ok(()),
        ]));
        let controller = controller(relay.clone());

        let (outcome, output) =
            run_with(&controller, "Jane\nAcme\njane@acme.com\nHi\ny\n").await;

        assert_eq!(outcome, PromptOutcome::Submitted);
        assert!(output.contains("Try again?"));
        let calls = relay.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_failure_without_retry_keeps_fields() {
        let relay = Arc::new(ScriptedRelay::new(vec![Err(RelayError::Transport(
            "dns".to_string(),
        ))]));
        let controller = controller(relay.clone());

        let (outcome, _) = run_with(&controller, "Jane\nAcme\njane@acme.com\nHi\nn\n").await;

        assert_eq!(outcome, PromptOutcome::Failed);
        assert_eq!(relay.calls().len(), 1);
        assert_eq!(controller.snapshot().email(), "jane@acme.com");
        assert!(!controller.is_submitting());
    }
}
