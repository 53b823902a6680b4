//! Heading text to link fragment.

#[must_use]
/// Encodes heading text as the fragment used in `[text](#fragment)` links.
///
/// Trailing whitespace is dropped, parentheses are percent-encoded and spaces become dashes.
/// Always encode from raw heading text: an already-encoded fragment would be encoded again.
pub fn to_anchor(text: &str) -> String {
    text.trim_end()
        .replace('(', "%28")
        .replace(')', "%29")
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::to_anchor;

    #[test]
    fn test_encodes_parens_and_spaces() {
        assert_eq!(to_anchor("My (Great) Idea "), "My-%28Great%29-Idea");
    }

    #[test]
    fn test_keeps_leading_space_and_dots() {
        assert_eq!(to_anchor("1.2 Setup"), "1.2-Setup");
        assert_eq!(to_anchor(" Lead"), "-Lead");
    }
}
