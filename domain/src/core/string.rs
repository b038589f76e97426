//! String utilities for the domain layer.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_len` bytes, ending in `...` when cut.
///
/// The cut always lands on a char boundary, so the result may be a few
/// bytes shorter than `max_len`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let end = s
        .char_indices()
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= budget)
        .last()
        .unwrap_or(0);

    format!("{}{}", &s[..end], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Acme Inc.", 20), "Acme Inc.");
        assert_eq!(truncate("Automate our invoicing", 10), "Automat...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'ü' is 2 bytes: "Müller" = 7 bytes
        assert_eq!(truncate("Müller GmbH", 20), "Müller GmbH");
        // max_len=5 -> budget=2 -> 'ü' spans bytes 1..3, back off to 1
        assert_eq!(truncate("Müller GmbH", 5), "M...");
    }

    #[test]
    fn test_truncate_tiny_budget() {
        assert_eq!(truncate("Acme Inc.", 2), "...");
        assert_eq!(truncate("", 0), "");
    }
}
