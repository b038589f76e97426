//! Business email classification
//!
//! An address is a *business email* when it has a plausible shape and its
//! base domain (the last two dot-separated labels) is not a free provider.
//!
//! The shape check is a sanity filter, not RFC 5322 validation:
//!
//! ```text
//! <local>@<host>.<tld>
//!   local, host: one or more chars, no whitespace, no '@'
//!   tld:         two or more chars, no whitespace, no '@'
//! ```
//!
//! Base-domain reduction only keeps the last two labels. `mail.corp.gmail.com` reduces
//! to `gmail.com` and is rejected, while `team.co.uk`-style registrable domains
//! collapse to their public suffix.

use super::blocked::is_blocked_domain;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ADDRESS_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("address shape pattern is valid")
});

/// Result of classifying a raw address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum EmailClassification {
    /// Well-formed, base domain is not a free provider
    Business { base_domain: String },
    /// Well-formed, base domain is a free provider
    FreeProvider { base_domain: String },
    /// Fails the basic address shape check
    Malformed,
}

impl EmailClassification {
    pub fn is_business(&self) -> bool {
        matches!(self, EmailClassification::Business { .. })
    }

    /// Base domain the verdict was decided on, if the address was well-formed.
    pub fn base_domain(&self) -> Option<&str> {
        match self {
            EmailClassification::Business { base_domain }
            | EmailClassification::FreeProvider { base_domain } => Some(base_domain),
            EmailClassification::Malformed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailClassification::Business { .. } => "business",
            EmailClassification::FreeProvider { .. } => "free-provider",
            EmailClassification::Malformed => "malformed",
        }
    }
}

impl std::fmt::Display for EmailClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Byte order mark, stripped along with surrounding whitespace.
const BOM: char = '\u{FEFF}';

/// Trim, lower-case, shape-check, and return the domain part.
pub fn extract_domain(raw: &str) -> Option<String> {
    let normalized = raw
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_lowercase();
    if !ADDRESS_SHAPE.is_match(&normalized) {
        return None;
    }
    normalized
        .split_once('@')
        .map(|(_, domain)| domain.to_string())
        .filter(|domain| !domain.is_empty())
}

/// Reduce a domain to its last two labels.
///
/// Domains with fewer than two labels are returned unchanged.
pub fn base_domain(domain: &str) -> &str {
    match domain.rmatch_indices('.').nth(1) {
        Some((idx, _)) => &domain[idx + 1..],
        None => domain,
    }
}

/// Classify a raw address.
pub fn classify(raw: &str) -> EmailClassification {
    let Some(domain) = extract_domain(raw) else {
        return EmailClassification::Malformed;
    };

    let base = base_domain(&domain).to_string();
    if is_blocked_domain(&base) {
        EmailClassification::FreeProvider { base_domain: base }
    } else {
        EmailClassification::Business { base_domain: base }
    }
}

/// `true` iff `raw` is an acceptable business email.
pub fn is_business_email(raw: &str) -> bool {
    classify(raw).is_business()
}
