//! Static landing page copy

pub const BRAND: &str = "Shmixy";

pub const NAV_LINKS: [&str; 2] = ["Solutions", "Contact"];

pub const HEADLINE: &str =
    "Meet Your New Team Member: AI. Always On. Always Selling. Always Supporting.";

pub const SUBHEADLINE: &str = "Boost sales, wow customers, and never miss a beat — with AI tailored to your essential needs.";

pub const HIGHLIGHTS: [&str; 3] = [
    "Smarter Sales",
    "Better Customer Support",
    "Real Results — Fast",
];

pub const PRIMARY_CTA: &str = "Schedule a meeting";

pub const SECONDARY_CTA: &str = "Explore solutions";

pub const CTA_FOOTNOTE: &str = "See what success can look like in just 60 days.";

/// A solution card in the features grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "AI Voice Agents",
        description: "24/7 agents that answer calls, qualify leads, book appointments, and support customers in natural voice.",
    },
    Feature {
        title: "Process Automation",
        description: "Intelligent workflows that handle repetitive work, integrate your tools, and keep teams in sync.",
    },
    Feature {
        title: "Websites & Apps",
        description: "High-quality, fast websites and applications engineered for conversions, reliability, and scale.",
    },
];

pub const CONTACT_HEADING: &str = "Get a Free Consultation";

pub const CONTACT_INTRO: &str = "Tell us about your goals. Business emails only; free providers like Gmail/Outlook are blocked.";

pub const FOOTER_LINK: &str = "Get a free consultation";
