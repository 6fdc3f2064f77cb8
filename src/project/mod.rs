mod error;
pub mod file_loader;

pub use error::LoadError;
pub use file_loader::{load_file, normalize_path, resolve_import_path};
