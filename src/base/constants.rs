//! Fixed lookup tables shared by the scanners and the IDE layer.

/// The JSX attribute whose value names CSS module classes.
pub const STYLE_NAME_ATTRIBUTE: &str = "styleName";

/// Characters that open or close a string literal in JS/TS sources.
pub const QUOTE_CHARS: &[char] = &['"', '\'', '`'];

/// Characters that trigger a completion request inside `styleName`.
pub const TRIGGER_CHARACTERS: &[char] = &['"', '\'', '`', ' '];

/// Stylesheet extensions recognized in import statements: the
/// `(s|pc|sc)?css` family plus `pcss`.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "scss", "pcss", "sccss", "pccss"];

/// A `(language, scheme)` pair identifying documents the analysis serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocumentFilter {
    pub language: &'static str,
    pub scheme: &'static str,
}

/// Documents completion and goto-definition are registered for.
pub const DOCUMENT_SELECTORS: &[DocumentFilter] = &[
    DocumentFilter {
        language: "typescriptreact",
        scheme: "file",
    },
    DocumentFilter {
        language: "javascriptreact",
        scheme: "file",
    },
    DocumentFilter {
        language: "javascript",
        scheme: "file",
    },
];
