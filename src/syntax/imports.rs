//! Stylesheet import extraction from JS/TS source text.

use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use crate::base::TextSize;
use crate::base::constants::STYLESHEET_EXTENSIONS;

/// `import`, `from` or `require(` followed by a quoted path ending in one of
/// [`STYLESHEET_EXTENSIONS`].
static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&import_pattern(STYLESHEET_EXTENSIONS)).unwrap());

fn import_pattern(extensions: &[&str]) -> String {
    let mut extensions = extensions.to_vec();
    extensions.sort_by_key(|ext| std::cmp::Reverse(ext.len()));
    let alternation = extensions
        .iter()
        .map(|ext| regex::escape(ext))
        .collect::<Vec<_>>()
        .join("|");

    format!(r#"(?:import|from|require\()\s*['"`]([^'"`\n]+\.(?:{alternation}))['"`]"#)
}

/// A stylesheet path referenced by a source file, as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportReference {
    /// Raw path between the quotes (relative or bare).
    pub path: SmolStr,
    /// Offset of the keyword that starts the match.
    pub offset: TextSize,
}

/// Find every stylesheet import in `source`, left to right.
///
/// Duplicates are kept: a stylesheet imported twice yields two references.
/// Paths are not checked against the file system.
pub fn scan_imports(source: &str) -> Vec<ImportReference> {
    IMPORT_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = caps.get(1)?;
            Some(ImportReference {
                path: SmolStr::new(path.as_str()),
                offset: TextSize::from(whole.start() as u32),
            })
        })
        .collect()
}

/// Whether `path` ends in one of the recognized stylesheet extensions.
pub fn is_stylesheet_path(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| STYLESHEET_EXTENSIONS.contains(&ext))
}
