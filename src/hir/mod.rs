//! Resolution layer: which style names a source file can see, and where.
//!
//! - [`DocumentSource`] - where file text comes from (open buffer, then storage)
//! - [`OpenDocuments`] - the editor's open buffers
//! - [`resolve_definitions`] - style names declared by a file's imported stylesheets

mod resolve;
mod source;

pub use resolve::{ResolvedDefinition, find_definition, resolve_definitions};
pub use source::{DocumentSource, OpenDocuments};
