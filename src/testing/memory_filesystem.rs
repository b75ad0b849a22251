use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::TemplateFilesystem;

/// In-memory filesystem for testing. Paths are rooted at `/` and `.` components are ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    executables: Arc<Mutex<Vec<PathBuf>>>,
    writes: Arc<Mutex<usize>>,
    deny_chmod: bool,
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    normalized
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.files.lock().unwrap().insert(normalize(path.as_ref()), content.to_string());
        self
    }

    /// Make every `set_executable` call fail with permission denied.
    pub fn deny_chmod(mut self) -> Self {
        self.deny_chmod = true;
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(&normalize(path.as_ref())).cloned()
    }

    pub fn is_executable(&self, path: impl AsRef<Path>) -> bool {
        let path = normalize(path.as_ref());
        self.executables.lock().unwrap().iter().any(|p| *p == path)
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files.lock().unwrap().keys().any(|k| k.starts_with(path) && k != path)
    }
}

impl TemplateFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.files.lock().unwrap().contains_key(&path) || self.is_dir(&path)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, path.display().to_string()).into()
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(normalize(path), content.to_string());
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        let normalized = normalize(path);
        if normalized == Path::new("/") || self.exists(&normalized) {
            Ok(normalized)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()).into())
        }
    }

    fn set_executable(&self, path: &Path) -> Result<(), AppError> {
        if self.deny_chmod {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "chmod denied").into());
        }
        self.executables.lock().unwrap().push(normalize(path));
        Ok(())
    }
}
