//! Definition resolution: the style names a source file can reach through its imports.
//!
//! For one source document this scans its stylesheet imports, loads every
//! imported stylesheet concurrently, and collects the class names each one
//! declares, tagged with the stylesheet's absolute path.
//!
//! Resolution never fails as a whole. An import that cannot be loaded
//! contributes nothing and the remaining imports still resolve.

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use smol_str::SmolStr;

use super::source::DocumentSource;
use crate::base::TextSize;
use crate::project::{LoadError, resolve_import_path};
use crate::syntax::{ImportReference, scan_imports, scan_selectors};

/// A style name declared in one imported stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDefinition {
    /// Absolute path of the declaring stylesheet.
    pub path: Arc<Path>,
    /// The class name, without the leading `.`.
    pub name: SmolStr,
    /// Offset of the name within the stylesheet text.
    pub offset: TextSize,
}

/// Collect the style names declared by every stylesheet `text` imports.
///
/// `source_path` is the absolute path of the document `text` belongs to;
/// relative imports are resolved against its directory. Results keep import
/// order and, within one stylesheet, declaration order. Names declared in
/// several stylesheets appear once per stylesheet.
pub async fn resolve_definitions<S>(
    source: &S,
    text: &str,
    source_path: &Path,
) -> Vec<ResolvedDefinition>
where
    S: DocumentSource + ?Sized,
{
    let imports = scan_imports(text);
    if imports.is_empty() {
        return Vec::new();
    }

    let per_import = imports
        .iter()
        .map(|import| resolve_import(source, source_path, import));

    join_all(per_import).await.into_iter().flatten().collect()
}

/// Find the first resolved definition of `name`.
pub fn find_definition<'a>(
    definitions: &'a [ResolvedDefinition],
    name: &str,
) -> Option<&'a ResolvedDefinition> {
    definitions.iter().find(|def| def.name == name)
}

async fn resolve_import<S>(
    source: &S,
    source_path: &Path,
    import: &ImportReference,
) -> Vec<ResolvedDefinition>
where
    S: DocumentSource + ?Sized,
{
    let path: Arc<Path> = resolve_import_path(source_path, &import.path).into();

    match load_definitions(source, &path).await {
        Ok(definitions) => definitions,
        Err(err) => {
            tracing::debug!(
                import = %import.path,
                path = %path.display(),
                error = %err,
                "skipping unreadable stylesheet"
            );
            Vec::new()
        }
    }
}

async fn load_definitions<S>(
    source: &S,
    path: &Arc<Path>,
) -> Result<Vec<ResolvedDefinition>, LoadError>
where
    S: DocumentSource + ?Sized,
{
    let text = source.read_text(path).await?;
    let occurrences = scan_selectors(&text);

    tracing::trace!(
        path = %path.display(),
        count = occurrences.len(),
        "scanned stylesheet"
    );

    Ok(occurrences
        .into_iter()
        .map(|occ| ResolvedDefinition {
            path: Arc::clone(path),
            name: occ.name,
            offset: occ.offset,
        })
        .collect())
}
