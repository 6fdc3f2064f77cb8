//! # stylename
//!
//! Completion and go-to-definition for CSS module `styleName` attributes in
//! JSX/TSX sources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → completion, goto-definition, cursor context, AnalysisHost
//!   ↓
//! hir      → style names visible from a source file (resolve_definitions)
//!   ↓
//! project  → reading stylesheets from storage, import path resolution
//!   ↓
//! syntax   → import and class selector scanners
//!   ↓
//! base     → primitives (TextSize, LineCol, LineIndex, constants)
//! ```

/// Foundation types: offsets, line/column mapping, constants
pub mod base;

/// Scanners: stylesheet imports and class selectors
pub mod syntax;

/// Storage access: file loading, path resolution
pub mod project;

/// Resolution: open buffers and style-name definitions
pub mod hir;

/// IDE features: completion, goto-definition
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextSize, find_position};
