use super::{
    normalize_stored_value, session_key_or_default, write_atomic, SessionStore,
};
use crate::error::{Error, Result};
use plist::{Dictionary, Value};
use std::fs;
use std::io::{self, Cursor, ErrorKind};
use std::path::{Path, PathBuf};

/// All sessions in one per-user property list, keyed by session key
#[derive(Debug, Clone)]
pub struct PlistStore {
    path: PathBuf,
}

impl PlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level dictionary of the plist, `None` if the file does not exist yet
    fn read_dictionary(&self) -> Result<Option<Dictionary>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.load_failed(e.to_string())),
        };

        let value = Value::from_reader(Cursor::new(bytes))
            .map_err(|e| self.load_failed(e.to_string()))?;

        value
            .into_dictionary()
            .map(Some)
            .ok_or_else(|| self.load_failed("top-level object is not a dictionary".to_string()))
    }

    fn load_failed(&self, reason: String) -> Error {
        Error::LoadFailed {
            path: self.path.clone(),
            reason,
        }
    }

    fn save_failed(&self, source: io::Error) -> Error {
        Error::SaveFailed {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for PlistStore {
    fn resolve_storage_path(&self, _session_key: Option<&str>) -> PathBuf {
        self.path.clone()
    }

    fn ensure_ready(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Ok(()),
        };

        fs::create_dir_all(dir).map_err(|source| Error::CreateTempDirFailed {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn save(&self, session_key: Option<&str>, value: &str) -> Result<()> {
        let key = session_key_or_default(session_key);

        // Never overwrite a plist we cannot parse
        let mut dict = self
            .read_dictionary()
            .map_err(|e| self.save_failed(io::Error::new(ErrorKind::InvalidData, e.to_string())))?
            .unwrap_or_else(Dictionary::new);

        dict.insert(key.to_string(), Value::String(value.to_string()));
        log::debug!("Saving '{}' under '{}' in {}", value, key, self.path.display());

        let mut buffer = Vec::new();
        Value::Dictionary(dict)
            .to_writer_xml(&mut buffer)
            .map_err(|e| self.save_failed(io::Error::new(ErrorKind::Other, e)))?;

        write_atomic(&self.path, &buffer).map_err(|e| self.save_failed(e))
    }

    fn load(&self, session_key: Option<&str>) -> Result<Option<String>> {
        let key = session_key_or_default(session_key);

        let Some(dict) = self.read_dictionary()? else {
            log::debug!("No preference file at {}", self.path.display());
            return Ok(None);
        };

        match dict.get(key) {
            None => Ok(None),
            Some(Value::String(stored)) => Ok(normalize_stored_value(stored)),
            Some(_) => Err(self.load_failed(format!("value for '{}' is not a string", key))),
        }
    }
}
