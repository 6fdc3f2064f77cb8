//! Analysis host — the entry point for editor requests.
//!
//! `AnalysisHost` owns the open buffers and the configuration. The host
//! keeps buffers current through [`AnalysisHost::documents`]; each request
//! reads them, recomputes from scratch, and returns owned results.

use std::path::Path;

use super::completion::{CompletionItem, completions};
use super::context::Document;
use super::goto::{GotoTarget, goto_definition};
use crate::base::LineCol;
use crate::base::constants::{DOCUMENT_SELECTORS, DocumentFilter, TRIGGER_CHARACTERS};
use crate::hir::OpenDocuments;

/// Tables the IDE features consume.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Characters after which completion is offered.
    pub trigger_characters: &'static [char],
    /// Documents the features are registered for.
    pub document_selectors: &'static [DocumentFilter],
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trigger_characters: TRIGGER_CHARACTERS,
            document_selectors: DOCUMENT_SELECTORS,
        }
    }
}

impl AnalysisConfig {
    /// Whether completion may start after `c`.
    pub fn is_trigger(&self, c: char) -> bool {
        self.trigger_characters.contains(&c)
    }

    /// Whether documents of `language` under `scheme` are served.
    pub fn supports(&self, language: &str, scheme: &str) -> bool {
        self.document_selectors
            .iter()
            .any(|f| f.language == language && f.scheme == scheme)
    }
}

/// Owns the open buffers and answers completion and definition requests.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    documents: OpenDocuments,
    config: AnalysisConfig,
}

impl AnalysisHost {
    /// Create a host with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            documents: OpenDocuments::new(),
            config,
        }
    }

    /// The open buffers, for the editor to open, update and close.
    pub fn documents(&self) -> &OpenDocuments {
        &self.documents
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Style-name completions for an open document.
    pub async fn completions(&self, path: &Path, position: LineCol) -> Vec<CompletionItem> {
        let Some(text) = self.documents.text(path) else {
            tracing::trace!(path = %path.display(), "completion for unopened document");
            return Vec::new();
        };
        let document = Document::new(path, &text);
        completions(&self.documents, &self.config, document, position).await
    }

    /// The declaration of the style name under the cursor in an open document.
    pub async fn goto_definition(&self, path: &Path, position: LineCol) -> Option<GotoTarget> {
        let Some(text) = self.documents.text(path) else {
            tracing::trace!(path = %path.display(), "definition for unopened document");
            return None;
        };
        let document = Document::new(path, &text);
        goto_definition(&self.documents, document, position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();

        assert!(config.is_trigger('"'));
        assert!(config.is_trigger(' '));
        assert!(!config.is_trigger('a'));

        assert!(config.supports("typescriptreact", "file"));
        assert!(config.supports("javascript", "file"));
        assert!(!config.supports("typescriptreact", "untitled"));
        assert!(!config.supports("css", "file"));
    }

    #[test]
    fn test_custom_config() {
        let host = AnalysisHost::with_config(AnalysisConfig {
            trigger_characters: &['"'],
            ..AnalysisConfig::default()
        });
        assert!(!host.config().is_trigger(' '));
    }

    #[tokio::test]
    async fn test_unopened_document_yields_nothing() {
        let host = AnalysisHost::new();
        let path = Path::new("/app/View.tsx");

        assert!(host.completions(path, LineCol::new(0, 0)).await.is_empty());
        assert!(host.goto_definition(path, LineCol::new(0, 0)).await.is_none());
    }

    #[tokio::test]
    async fn test_host_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("s.css"), ".btn{} .btn-lg{}").unwrap();
        let view = dir.path().join("View.tsx");
        let path = view.as_path();

        let host = AnalysisHost::new();
        host.documents()
            .open(path, "import s from './s.css';\n<a styleName=\"btn-lg\" />");

        let labels: Vec<_> = host
            .completions(path, LineCol::new(1, 14))
            .await
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["btn", "btn-lg"]);

        let target = host.goto_definition(path, LineCol::new(1, 17)).await.unwrap();
        assert_eq!(target.name, "btn-lg");
        assert_eq!(target.position, LineCol::new(0, 7));
    }
}
