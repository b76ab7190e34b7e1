//! Sentence segmentation of free-text work descriptions

/// Statements shorter than this are treated as noise by [`key_points`]
pub const MIN_KEY_POINT_LEN: usize = 11;

/// Split text into trimmed, non-empty statements on `.` and newlines.
///
/// Order is preserved; empty fragments from consecutive or trailing
/// delimiters are dropped.
pub fn statements(text: &str) -> Vec<&str> {
    text.split(['.', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Statements long enough to count as a contribution.
///
/// Same split as [`statements`], minus anything under
/// [`MIN_KEY_POINT_LEN`] characters.
pub fn key_points(text: &str) -> Vec<&str> {
    statements(text)
        .into_iter()
        .filter(|s| s.chars().count() >= MIN_KEY_POINT_LEN)
        .collect()
}

/// Render statements as `• ` bullets, one per line
pub fn bulleted<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_periods_and_newlines() {
        assert_eq!(
            statements("Fixed login bug. Reviewed PR\nPaired on search"),
            vec!["Fixed login bug", "Reviewed PR", "Paired on search"]
        );
    }

    #[test]
    fn test_drops_empty_fragments() {
        assert_eq!(statements("One..  Two.\n\n. Three."), vec!["One", "Two", "Three"]);
        assert!(statements("").is_empty());
        assert!(statements(" . \n ").is_empty());
    }

    #[test]
    fn test_handles_crlf() {
        assert_eq!(statements("First\r\nSecond"), vec!["First", "Second"]);
    }

    #[test]
    fn test_key_points_filter_short_fragments() {
        // "Reviewed PR" is exactly 11 characters and survives, "Fixed it" does not
        assert_eq!(
            key_points("Fixed it. Reviewed PR. Shipped the billing export"),
            vec!["Reviewed PR", "Shipped the billing export"]
        );
        assert!(key_points("Short. Tiny").is_empty());
    }

    #[test]
    fn test_key_points_length_counts_characters() {
        // ten multi-byte characters are still too short
        assert!(key_points("éééééééééé").is_empty());
        assert_eq!(key_points("ééééééééééé").len(), 1);
    }

    #[test]
    fn test_version_numbers_split_on_periods() {
        assert_eq!(statements("Upgraded to v1.2"), vec!["Upgraded to v1", "2"]);
    }

    #[test]
    fn test_bulleted() {
        assert_eq!(bulleted(&["a", "b"]), "• a\n• b");
        assert_eq!(bulleted(&["only"]), "• only");
        assert_eq!(bulleted::<&str>(&[]), "");
    }
}
