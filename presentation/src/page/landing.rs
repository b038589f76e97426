//! Terminal rendering of the landing page

use super::content::{
    BRAND, CONTACT_HEADING, CONTACT_INTRO, CTA_FOOTNOTE, FEATURES, FOOTER_LINK, HEADLINE,
    HIGHLIGHTS, NAV_LINKS, PRIMARY_CTA, SECONDARY_CTA, SUBHEADLINE,
};
use crate::output::console::ConsoleFormatter;
use chrono::Datelike;
use colored::Colorize;

/// Landing page renderer
///
/// The footer year is fixed at construction so output is stable within a run.
pub struct LandingPage {
    year: i32,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::with_year(chrono::Local::now().year())
    }

    pub fn with_year(year: i32) -> Self {
        Self { year }
    }

    /// Render the whole page
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&Self::header());
        output.push_str(&Self::hero());
        output.push_str(&Self::features());
        output.push_str(&Self::contact_intro());
        output.push_str(&self.footer());
        output
    }

    fn header() -> String {
        format!(
            "{}    {}\n{}\n",
            BRAND.bold(),
            NAV_LINKS.join("  ").dimmed(),
            "-".repeat(60).dimmed()
        )
    }

    fn hero() -> String {
        let mut output = format!("\n{}\n\n{}\n\n", HEADLINE.bold(), SUBHEADLINE);
        for item in HIGHLIGHTS {
            output.push_str(&format!("  {} {}\n", "v".green().bold(), item));
        }
        output.push_str(&format!(
            "\n  {}  {}\n  {}\n",
            format!("[ {} ]", PRIMARY_CTA).cyan().bold(),
            format!("[ {} ]", SECONDARY_CTA).dimmed(),
            CTA_FOOTNOTE.dimmed()
        ));
        output
    }

    fn features() -> String {
        let mut output = ConsoleFormatter::section_header("Solutions");
        for feature in FEATURES {
            output.push_str(&format!(
                "\n{}\n{}\n",
                feature.title.yellow().bold(),
                ConsoleFormatter::indent(feature.description, "  ")
            ));
        }
        output
    }

    /// Contact section heading and intro, shown above the form
    pub fn contact_intro() -> String {
        format!(
            "{}\n{}\n",
            ConsoleFormatter::section_header(CONTACT_HEADING),
            CONTACT_INTRO.dimmed()
        )
    }

    fn footer(&self) -> String {
        format!(
            "\n{}\n{}    {}\n",
            "-".repeat(60).dimmed(),
            format!("(c) {} {}", self.year, BRAND).dimmed(),
            FOOTER_LINK.dimmed()
        )
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}
