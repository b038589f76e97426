//! Free email providers that do not count as business addresses

use std::collections::HashSet;
use std::sync::LazyLock;

/// Base domains of consumer mail providers.
///
/// Entries are already lower-case base domains (last two labels), which is
/// the form [`base_domain`](super::classifier::base_domain) produces.
pub const FREE_PROVIDER_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "outlook.com",
    "hotmail.com",
    "live.com",
    "yahoo.com",
    "yahoo.co.uk",
    "icloud.com",
    "me.com",
    "msn.com",
    "aol.com",
    "proton.me",
    "protonmail.com",
    "gmx.com",
    "gmx.net",
    "ymail.com",
    "zoho.com",
    "mail.com",
    "yandex.com",
    "yandex.ru",
    "fastmail.com",
];

static BLOCKED_DOMAINS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FREE_PROVIDER_DOMAINS.iter().copied().collect());

/// The process-wide blocked-domain set, built on first use.
pub fn blocked_domains() -> &'static HashSet<&'static str> {
    &BLOCKED_DOMAINS
}

/// Check whether a base domain belongs to a free provider.
///
/// Matching is exact; callers are expected to pass a lower-cased base domain.
pub fn is_blocked_domain(base: &str) -> bool {
    BLOCKED_DOMAINS.contains(base)
}
