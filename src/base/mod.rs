//! Foundation types for the styleName toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`find_position`] - Map the first occurrence of a needle to a line/column
//! - Domain constants (quote characters, stylesheet extensions, document selectors)
//!
//! This module has NO dependencies on other stylename modules.

pub mod constants;
mod span;

pub use constants::DocumentFilter;
pub use span::{LineCol, LineIndex, TextSize, find_position};
