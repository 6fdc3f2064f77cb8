//! Completion of style names inside `styleName` string values.

use std::sync::Arc;

use smol_str::SmolStr;

use super::analysis::AnalysisConfig;
use super::context::{Document, is_inside_string, is_style_name_value, prefix_at};
use crate::base::LineCol;
use crate::hir::{DocumentSource, ResolvedDefinition, resolve_definitions};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Variable,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Variable => 6,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The style name to insert.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (the declaring stylesheet).
    pub detail: Option<Arc<str>>,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<ResolvedDefinition> for CompletionItem {
    fn from(def: ResolvedDefinition) -> Self {
        CompletionItem::new(def.name, CompletionKind::Variable)
            .with_detail(def.path.display().to_string())
    }
}

/// Get style-name completions at a position.
///
/// Returns candidates only right after a trigger character, inside a
/// string that is the value of a `styleName` attribute. Every style name of
/// every imported stylesheet is offered; the editor does the filtering.
pub async fn completions<S>(
    source: &S,
    config: &AnalysisConfig,
    document: Document<'_>,
    position: LineCol,
) -> Vec<CompletionItem>
where
    S: DocumentSource + ?Sized,
{
    let Some(line) = document.line(position.line) else {
        return Vec::new();
    };
    let target = prefix_at(line, position.col);

    let after_trigger = target
        .chars()
        .next_back()
        .is_some_and(|c| config.is_trigger(c));
    if !after_trigger || !is_style_name_value(target) || !is_inside_string(target, None) {
        return Vec::new();
    }

    resolve_definitions(source, document.text, document.path)
        .await
        .into_iter()
        .map(CompletionItem::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::OpenDocuments;
    use std::path::Path;

    const SOURCE: &str = "import s from './s.css';
<div styleName=\"\" className='x' />
";

    fn host_docs() -> OpenDocuments {
        let docs = OpenDocuments::new();
        docs.open("/app/s.css", ".btn{} .btn-lg{}");
        docs
    }

    async fn labels_at(col: u32) -> Vec<String> {
        let docs = host_docs();
        let document = Document::new(Path::new("/app/View.tsx"), SOURCE);
        let config = AnalysisConfig::default();
        completions(&docs, &config, document, LineCol::new(1, col))
            .await
            .into_iter()
            .map(|item| item.label.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_after_opening_quote() {
        // `<div styleName="` is 16 bytes
        assert_eq!(labels_at(16).await, vec!["btn", "btn-lg"]);
    }

    #[tokio::test]
    async fn test_wrong_attribute() {
        // just after `className='`
        assert!(labels_at(29).await.is_empty());
    }

    #[tokio::test]
    async fn test_outside_string() {
        // just after `styleName=`
        assert!(labels_at(15).await.is_empty());
    }

    #[tokio::test]
    async fn test_requires_trigger_character() {
        let docs = host_docs();
        let text = "import './s.css';\n<p styleName=\"bt";
        let document = Document::new(Path::new("/app/View.tsx"), text);

        let config = AnalysisConfig::default();
        let items = completions(&docs, &config, document, LineCol::new(1, 16)).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_after_space_in_value() {
        let docs = host_docs();
        let text = "import './s.css';\n<p styleName=\"btn ";
        let document = Document::new(Path::new("/app/View.tsx"), text);

        let config = AnalysisConfig::default();
        let items = completions(&docs, &config, document, LineCol::new(1, 18)).await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == CompletionKind::Variable));
        assert_eq!(items[0].detail.as_deref(), Some("/app/s.css"));
    }

    #[tokio::test]
    async fn test_line_out_of_range() {
        assert!(
            completions(
                &host_docs(),
                &AnalysisConfig::default(),
                Document::new(Path::new("/app/View.tsx"), SOURCE),
                LineCol::new(9, 0),
            )
            .await
            .is_empty()
        );
    }

    #[test]
    fn test_kind_to_lsp() {
        assert_eq!(CompletionKind::Variable.to_lsp(), 6);
    }
}
