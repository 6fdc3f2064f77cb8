//! Cursor context: is the cursor inside a `styleName="..."` value?
//!
//! The predicates work on `target`, the text of the cursor's line up to (not
//! including) the cursor. They are heuristics over raw text: no JSX parsing,
//! only the last `=` before the cursor and the quotes after it are looked at.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::base::constants::{QUOTE_CHARS, STYLE_NAME_ATTRIBUTE};

static STYLE_NAME_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[A-Za-z_][A-Za-z0-9_-]*").unwrap());

/// A source document a request is made against.
#[derive(Clone, Copy, Debug)]
pub struct Document<'a> {
    /// Absolute path of the document.
    pub path: &'a Path,
    /// Current text of the document, including unsaved edits.
    pub text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        Self { path, text }
    }

    /// The text of a 0-indexed line, without its `\n`.
    pub fn line(&self, line: u32) -> Option<&'a str> {
        self.text.split('\n').nth(line as usize)
    }
}

/// The part of `line` before byte column `col`.
///
/// Columns past the end are clamped; a column inside a multi-byte character
/// is moved back to that character's start.
pub fn prefix_at(line: &str, col: u32) -> &str {
    let mut end = (col as usize).min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Whether the last `=` in `target` directly follows `styleName`.
///
/// Only the characters right before the `=` are compared, so
/// `data-styleName=` is accepted and `styleName =` is not.
pub fn is_style_name_value(target: &str) -> bool {
    target
        .rfind('=')
        .is_some_and(|eq| target[..eq].ends_with(STYLE_NAME_ATTRIBUTE))
}

/// Whether `target` ends inside a string literal opened after its last `=`.
///
/// With no `quote` given, the quote character that occurs last after the
/// `=` is used. The cursor is inside the string when an odd number of
/// those quotes follow the `=`.
pub fn is_inside_string(target: &str, quote: Option<char>) -> bool {
    let Some(eq) = target.rfind('=') else {
        return false;
    };
    let tail = &target[eq..];

    let Some(quote) = quote.or_else(|| last_quote(tail)) else {
        return false;
    };

    let pieces = tail.split(quote).count();
    pieces >= 2 && pieces % 2 == 0
}

fn last_quote(text: &str) -> Option<char> {
    QUOTE_CHARS
        .iter()
        .filter_map(|&q| text.rfind(q).map(|at| (at, q)))
        .max_by_key(|&(at, _)| at)
        .map(|(_, q)| q)
}

/// The style-name token of `line` that touches byte offset `offset`.
///
/// A token spanning `start..end` touches every offset in `start..=end`, so a
/// cursor right after a name still selects it.
pub fn style_name_at_point(line: &str, offset: u32) -> Option<&str> {
    let offset = offset as usize;
    STYLE_NAME_TOKEN_RE
        .find_iter(line)
        .find(|m| m.start() <= offset && offset <= m.end())
        .map(|m| m.as_str())
}
