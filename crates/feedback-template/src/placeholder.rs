//! Bracketed placeholder passes over a paragraph sequence.

use crate::document::ParagraphText;
use regex::Regex;
use std::sync::OnceLock;

/// Rendering of a selected option tag.
pub const MARKED: &str = "[X]";

/// Rendering of an unselected option tag.
pub const UNMARKED: &str = "[ ]";

/// `p7` becomes `[p7]`.
pub fn bracketed(tag: &str) -> String {
    format!("[{tag}]")
}

/// Replace every `[tag]` with `value` in each paragraph containing it.
///
/// The value is inserted verbatim. Returns the number of paragraphs changed;
/// zero when the tag does not occur anywhere.
pub fn replace_placeholder<'a, P>(
    paragraphs: impl IntoIterator<Item = &'a mut P>,
    tag: &str,
    value: &str,
) -> usize
where
    P: ParagraphText + 'a,
{
    let needle = bracketed(tag);
    let mut changed = 0;
    for paragraph in paragraphs {
        let text = paragraph.text();
        if text.contains(&needle) {
            paragraph.set_text(&text.replace(&needle, value));
            changed += 1;
        }
    }
    changed
}

/// Render each listed tag as [`MARKED`] or [`UNMARKED`].
///
/// `marks` pairs a tag with whether its option is selected. Tags missing
/// from a paragraph leave it untouched. Returns the number of paragraphs
/// changed.
pub fn mark_options<'a, P>(
    paragraphs: impl IntoIterator<Item = &'a mut P>,
    marks: &[(&str, bool)],
) -> usize
where
    P: ParagraphText + 'a,
{
    let mut changed = 0;
    for paragraph in paragraphs {
        let mut text = paragraph.text();
        let mut touched = false;
        for (tag, selected) in marks {
            let needle = bracketed(tag);
            if text.contains(&needle) {
                let rendering = if *selected { MARKED } else { UNMARKED };
                text = text.replace(&needle, rendering);
                touched = true;
            }
        }
        if touched {
            paragraph.set_text(&text);
            changed += 1;
        }
    }
    changed
}

/// Placeholder tags in `text`, in order of appearance.
///
/// Tags start with a lowercase letter, so the `[X]` / `[ ]` renderings are
/// never reported.
pub fn scan_tags(text: &str) -> Vec<&str> {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        TAG_REGEX.get_or_init(|| Regex::new(r"\[([a-z][a-z0-9_]*)\]").expect("valid regex"));
    regex
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}
