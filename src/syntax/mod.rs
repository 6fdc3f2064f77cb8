// Text scanners for JS/TS sources and stylesheets
pub mod imports;
pub mod selectors;

pub use imports::{ImportReference, is_stylesheet_path, scan_imports};
pub use selectors::{StyleNameOccurrence, scan_selectors};
