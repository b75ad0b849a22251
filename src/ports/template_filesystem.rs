//! Filesystem operations needed to render an installer.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for reading templates and writing rendered scripts.
pub trait TemplateFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Create or truncate `path` and write `content` to it.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Resolve `path` to an absolute path with symlinks followed. The path must exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Set the executable bits on a file (no-op where unsupported).
    fn set_executable(&self, path: &Path) -> Result<(), AppError>;
}
