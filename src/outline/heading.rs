//! Heading lines: the only markdown syntax the outline pass reads and writes.
//!
//! A heading is the first line of a markdown cell, opening with one to six `#` markers. The
//! space after the markers is optional on input and always written on output.

/// Deepest heading level the marker syntax supports.
pub const MAX_LEVEL: usize = 6;

const MARKER: char = '#';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A heading parsed out of a cell's text, borrowing from it.
pub struct Heading<'a> {
    /// Number of markers, 1 being the highest level.
    pub level: usize,
    /// Heading text after the markers, trimmed.
    pub title: &'a str,
    /// Anything after the heading line, including its leading newline.
    pub rest: &'a str,
}

impl<'a> Heading<'a> {
    #[must_use]
    /// Parses the heading at the start of `text`, if there is one.
    pub fn parse(text: &'a str) -> Option<Self> {
        let level = marker_run(text);
        if level == 0 || level > MAX_LEVEL {
            return None;
        }
        let (line, rest) = text.find('\n').map_or((text, ""), |nl| text.split_at(nl));
        Some(Self {
            level,
            title: line[level..].trim(),
            rest,
        })
    }

    #[must_use]
    /// Re-renders this heading with a different title.
    pub fn with_title(&self, title: &str) -> String {
        compose(self.level, title, self.rest)
    }
}

#[must_use]
/// Heading level of `text`: the marker count, or 0 when it is not a heading.
pub fn level(text: &str) -> usize {
    Heading::parse(text).map_or(0, |h| h.level)
}

/// Count of leading marker characters.
fn marker_run(text: &str) -> usize {
    text.chars().take_while(|&c| c == MARKER).count()
}

#[must_use]
/// Builds heading text from its parts.
pub fn compose(level: usize, title: &str, rest: &str) -> String {
    format!("{} {}{rest}", MARKER.to_string().repeat(level), title.trim())
}

#[must_use]
/// Drops any leading section label (digits and dots) and the whitespace after it.
///
/// Titles that genuinely start with a number lose it too, e.g. `2024 Plans` becomes `Plans`.
pub fn strip_label(title: &str) -> &str {
    title
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.')
        .trim_start()
}

#[must_use]
/// Whether `text` opens with a heading whose title starts with `phrase`.
///
/// Returns the matched prefix (markers, optional spacing and the phrase) so a caller can
/// reproduce it exactly.
pub fn phrase_prefix<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    let markers = marker_run(text);
    if markers == 0 {
        return None;
    }
    let after = text[markers..].trim_start_matches([' ', '\t']);
    if !after.starts_with(phrase) {
        return None;
    }
    let end = text.len() - after.len() + phrase.len();
    Some(&text[..end])
}

#[cfg(test)]
#[path = "../tests/heading.rs"]
mod tests;
