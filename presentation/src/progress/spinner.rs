//! "Sending..." indicator shown while a lead is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown next to the submit button label
pub struct SendingSpinner {
    bar: ProgressBar,
}

impl SendingSpinner {
    /// Start a spinner with `label`; hidden when `visible` is false
    pub fn start(label: &str, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(Self::spinner_style());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(label.to_string());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.bold}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shmixy_domain::SUBMITTING_LABEL;

    #[test]
    fn test_hidden_spinner_keeps_label() {
        let spinner = SendingSpinner::start(SUBMITTING_LABEL, false);
        assert!(spinner.bar.is_hidden());
        assert_eq!(spinner.bar.message(), "Sending...");
        spinner.finish();
    }
}
