//! Keeping internal links pointed at renamed headings.
//!
//! Links are matched on their fragment only: `[any text](#Old-Title)` and the reference form
//! `[label]: #Old-Title`. The fragment must be followed by the closing `)`, a space or tab (as
//! before a link title), or the end of the line. The visible link text is never touched, and
//! the table of contents is skipped because it is rebuilt whole.

use crate::outline::anchor::to_anchor;
use crate::outline::OutlineOptions;
use crate::store::CellStore;
use regex::{Captures, Regex};

/// Builds the pattern matching links whose fragment encodes `title`.
///
/// Every character of the title is escaped, except that spaces match the dash they encode to
/// and parentheses match either themselves or their percent-encoding.
fn link_pattern(title: &str) -> Result<Regex, regex::Error> {
    let mut fragment = String::new();
    for ch in title.trim_end().chars() {
        match ch {
            ' ' => fragment.push('-'),
            '(' => fragment.push_str(r"(?:\(|%28)"),
            ')' => fragment.push_str(r"(?:\)|%29)"),
            _ => fragment.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
        }
    }
    Regex::new(&format!(
        r"(?m)(?P<head>\[[^\]\n]*\](?::[ \t]*|\()#){fragment}(?P<tail>\)|[ \t]|$)"
    ))
}

#[must_use]
/// Rewrites the fragment of every link `pattern` matches in `text`, or `None` if none did.
pub fn retarget(text: &str, pattern: &Regex, new_anchor: &str) -> Option<String> {
    let mut hit = false;
    let out = pattern.replace_all(text, |caps: &Captures| {
        hit = true;
        format!("{}{new_anchor}{}", &caps["head"], &caps["tail"])
    });
    hit.then(|| out.into_owned())
}

/// Points every link at `old_title` to `new_title` instead. Returns the number of cells changed.
pub fn rewrite_links<S: CellStore>(
    store: &mut S,
    old_title: &str,
    new_title: &str,
    options: &OutlineOptions,
) -> usize {
    let pattern = match link_pattern(old_title) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("cannot match links to {old_title:?}: {e}");
            return 0;
        }
    };
    let new_anchor = to_anchor(new_title.trim());

    let mut changed = 0;
    for index in 0..store.len() {
        if !store.kind(index).is_markdown() || options.is_toc(store.text(index)) {
            continue;
        }
        if let Some(text) = retarget(store.text(index), &pattern, &new_anchor) {
            store.rewrite(index, text);
            changed += 1;
        }
    }
    if changed > 0 {
        log::debug!("retargeted links to {old_title:?} in {changed} cells");
    }
    changed
}

#[cfg(test)]
#[path = "../tests/links.rs"]
mod tests;
