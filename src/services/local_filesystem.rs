use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::TemplateFilesystem;

/// Local-disk implementation of [`TemplateFilesystem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl TemplateFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).map_err(|_| AppError::Encoding { path: path.to_path_buf() })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        Ok(fs::canonicalize(path)?)
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(perms.mode() | 0o111);
            fs::set_permissions(path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }
}
