//! Console output formatting

use colored::Colorize;
use serde::Serialize;
use shmixy_domain::EmailClassification;

/// One classified address, as printed by `shmixy check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedEmail {
    pub email: String,
    #[serde(flatten)]
    pub classification: EmailClassification,
}

impl CheckedEmail {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        let classification = shmixy_domain::classify(&email);
        Self {
            email,
            classification,
        }
    }

    pub fn is_business(&self) -> bool {
        self.classification.is_business()
    }
}

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format classification results, one address per line
    pub fn format_check(results: &[CheckedEmail]) -> String {
        let width = results
            .iter()
            .map(|r| r.email.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for result in results {
            let verdict = match &result.classification {
                EmailClassification::Business { .. } => "business".green().bold(),
                EmailClassification::FreeProvider { .. } => "free-provider".red().bold(),
                EmailClassification::Malformed => "malformed".yellow().bold(),
            };
            let base = result
                .classification
                .base_domain()
                .map(|b| format!(" ({})", b).dimmed().to_string())
                .unwrap_or_default();
            output.push_str(&format!(
                "{:<width$}  {}{}\n",
                result.email,
                verdict,
                base,
                width = width
            ));
        }
        output
    }

    /// Format classification results as JSON
    pub fn format_check_json(results: &[CheckedEmail]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Force colored output on or off for the whole process
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
