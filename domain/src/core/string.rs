//! String helpers for log and progress previews.

/// Truncate a string to at most `max_len` bytes, appending `...` (UTF-8 safe).
///
/// Used to keep claim previews in log records bounded.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_is_unchanged() {
        assert_eq!(truncate("sky is blue", 20), "sky is blue");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("The moon is made of cheese", 10), "The moo...");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // "é" is two bytes; cutting at byte 4 would split it
        assert_eq!(truncate("caféterie", 7), "caf...");
    }
}
