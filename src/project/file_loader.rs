//! Reading stylesheets from storage and resolving import paths.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::LoadError;

/// Read a file from storage and decode it as UTF-8.
pub async fn load_file(path: &Path) -> Result<Arc<str>, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| LoadError::io(path, e))?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_owned(),
    })?;

    Ok(Arc::from(text))
}

/// Resolve a raw import path against the directory of the importing file.
///
/// An absolute `raw` path replaces the base. The result is normalized
/// lexically; symlinks are not followed.
pub fn resolve_import_path(source_path: &Path, raw: &str) -> PathBuf {
    let base = source_path.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&base.join(raw))
}

/// Remove `.` components and fold `..` into the preceding component.
///
/// `..` at the root is dropped; leading `..` on a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/src/app/View.tsx", "./View.css", "/src/app/View.css")]
    #[case("/src/app/View.tsx", "../styles/base.scss", "/src/styles/base.scss")]
    #[case("/src/app/View.tsx", "shared/a.css", "/src/app/shared/a.css")]
    #[case("/src/app/View.tsx", "/abs/theme.css", "/abs/theme.css")]
    #[case("/View.tsx", "../../up.css", "/up.css")]
    fn test_resolve_import_path(#[case] source: &str, #[case] raw: &str, #[case] expected: &str) {
        assert_eq!(
            resolve_import_path(Path::new(source), raw),
            PathBuf::from(expected)
        );
    }

    #[test]
    fn test_normalize_relative_keeps_leading_parent() {
        assert_eq!(
            normalize_path(Path::new("../a/./b/../c.css")),
            PathBuf::from("../a/c.css")
        );
    }

    #[tokio::test]
    async fn test_load_file_reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.css");
        std::fs::write(&path, ".a { }").unwrap();

        let text = load_file(&path).await.unwrap();
        assert_eq!(&*text, ".a { }");
    }

    #[tokio::test]
    async fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.css")).await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.css");
        std::fs::write(&path, [0xff, 0xfe, 0x2e]).unwrap();

        let err = load_file(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidUtf8 { .. }));
    }
}
