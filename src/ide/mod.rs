//! IDE features — High-level APIs for editor requests.
//!
//! This module provides the interface between the resolution layer (HIR)
//! and the editor host. Each function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Recompute per request**: No caching; every call rescans the imports
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Degrade, never fail**: Missing context or files give empty results
//!
//! ## Usage
//!
//! ```ignore
//! use stylename::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.documents().open("/app/View.tsx", source_text);
//!
//! let items = host.completions(Path::new("/app/View.tsx"), position).await;
//! ```

mod analysis;
mod completion;
mod context;
mod goto;

pub use analysis::{AnalysisConfig, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use context::{
    Document, is_inside_string, is_style_name_value, prefix_at, style_name_at_point,
};
pub use goto::{GotoTarget, goto_definition};
