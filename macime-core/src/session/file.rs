use super::{normalize_stored_value, resolve_storage_path, write_atomic, SessionStore};
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One plain-text file per session key under a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl SessionStore for FileStore {
    fn resolve_storage_path(&self, session_key: Option<&str>) -> PathBuf {
        resolve_storage_path(&self.base_dir, session_key)
    }

    fn ensure_ready(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).map_err(|source| Error::CreateTempDirFailed {
            path: self.base_dir.clone(),
            source,
        })
    }

    fn save(&self, session_key: Option<&str>, value: &str) -> Result<()> {
        let path = self.resolve_storage_path(session_key);
        log::debug!("Saving '{}' to {}", value, path.display());

        write_atomic(&path, value.as_bytes()).map_err(|source| Error::SaveFailed { path, source })
    }

    fn load(&self, session_key: Option<&str>) -> Result<Option<String>> {
        let path = self.resolve_storage_path(session_key);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let value = normalize_stored_value(&contents);
                log::debug!("Loaded {:?} from {}", value, path.display());
                Ok(value)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No session file at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(Error::LoadFailed {
                path,
                reason: e.to_string(),
            }),
        }
    }
}
