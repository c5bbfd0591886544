//! Text helper functions

/// Truncate a string to a maximum number of characters
///
/// Strings at or under the limit come back unchanged; longer strings
/// are cut at the limit and suffixed with "...". Counting is by char,
/// not byte, so multi-byte text never splits mid-character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "Hello...");
        assert_eq!(truncate("Hi", 10), "Hi");
    }

    #[test]
    fn test_truncate_boundary() {
        assert_eq!(truncate("exact", 5), "exact");
        assert_eq!(truncate("exact!", 5), "exact...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("日本語のテキスト", 3), "日本語...");
        assert_eq!(truncate("日本語", 3), "日本語");
    }
}
