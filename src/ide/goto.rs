//! Go-to-definition for style names.

use std::path::Path;
use std::sync::Arc;

use smol_str::SmolStr;

use super::context::{Document, is_style_name_value, prefix_at, style_name_at_point};
use crate::base::{LineCol, find_position};
use crate::hir::{DocumentSource, find_definition, resolve_definitions};
use crate::project::load_file;

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The stylesheet declaring the style name.
    pub path: Arc<Path>,
    /// The style name that was looked up.
    pub name: SmolStr,
    /// Position of `.name` in the stylesheet, or the origin when the
    /// selector text could not be found again.
    pub position: LineCol,
}

/// Find the declaration of the style name under the cursor.
///
/// The line before the cursor must be inside a `styleName` value; the name
/// itself is read from the full line so the cursor may sit anywhere in it.
/// When several stylesheets declare the name, the first import wins.
///
/// Names are resolved through `source`, so unsaved buffers count, but the
/// position is searched in the stylesheet as stored. A name that only exists
/// in an unsaved buffer maps to the origin.
pub async fn goto_definition<S>(
    source: &S,
    document: Document<'_>,
    position: LineCol,
) -> Option<GotoTarget>
where
    S: DocumentSource + ?Sized,
{
    let line = document.line(position.line)?;
    let target = prefix_at(line, position.col);
    if !is_style_name_value(target) {
        return None;
    }

    let name = style_name_at_point(line, target.len() as u32)?;
    let definitions = resolve_definitions(source, document.text, document.path).await;
    let Some(definition) = find_definition(&definitions, name) else {
        tracing::debug!(name, "no stylesheet declares style name");
        return None;
    };

    let text = match load_file(&definition.path).await {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                path = %definition.path.display(),
                error = %err,
                "stylesheet unreadable from storage"
            );
            return None;
        }
    };

    Some(GotoTarget {
        path: Arc::clone(&definition.path),
        name: definition.name.clone(),
        position: find_position(&text, &format!(".{name}")),
    })
}
