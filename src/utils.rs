/// Canonical form of a tag value: trimmed, lowercased.
///
/// All interest-vector keys and tag comparisons go through this.
#[inline]
pub fn normalize_tag(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Char-boundary-safe prefix, for ids in log lines.
#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Wood "), "wood");
        assert_eq!(normalize_tag("ELECTRONICS"), "electronics");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_tag(" Käse"), "käse");
        assert_eq!(normalize_tag("ДЕРЕВО "), "дерево");
    }

    #[test]
    fn test_normalize_whitespace_only() {
        assert_eq!(normalize_tag("   "), "");
    }

    #[test]
    fn test_safe_truncate_ascii() {
        assert_eq!(safe_truncate("user_12345678abcd", 12), "user_1234567");
    }

    #[test]
    fn test_safe_truncate_cyrillic() {
        assert_eq!(safe_truncate("Привет мир", 6), "Привет");
    }

    #[test]
    fn test_safe_truncate_shorter() {
        assert_eq!(safe_truncate("hi", 10), "hi");
    }
}
