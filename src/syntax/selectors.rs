//! Class selector extraction from stylesheet text.
//!
//! This is a scanning heuristic, not a CSS parser. A `.name` token directly
//! followed by a run of argument-like characters that closes with `)` is
//! taken to be part of a function call (`url(icon.png)`, `:not(.x)`) and is
//! dropped. That also drops real selectors used inside such arguments.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::base::TextSize;

/// Group 1 is the class identifier, group 2 the function-call suffix.
static SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)([\w/:%#$&?()~.=+\s"'-]*\))?"#).unwrap()
});

/// The first occurrence of a class name within one stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleNameOccurrence {
    pub name: SmolStr,
    /// Offset of the identifier (just past the leading `.`).
    pub offset: TextSize,
}

/// Collect the class names declared in `text`, in first-seen order.
pub fn scan_selectors(text: &str) -> Vec<StyleNameOccurrence> {
    let mut seen = FxHashSet::default();
    let mut occurrences = Vec::new();

    for caps in SELECTOR_RE.captures_iter(text) {
        if caps.get(2).is_some() {
            continue;
        }
        let Some(ident) = caps.get(1) else {
            continue;
        };
        if !seen.insert(ident.as_str()) {
            continue;
        }
        occurrences.push(StyleNameOccurrence {
            name: SmolStr::new(ident.as_str()),
            offset: TextSize::from(ident.start() as u32),
        });
    }

    occurrences
}
