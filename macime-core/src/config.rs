//! Store configuration read from the environment

use crate::error::{Error, Result};
use crate::session::{FileStore, PlistStore, SessionStore};
use std::path::PathBuf;
use std::str::FromStr;

/// Overrides the directory holding per-session files
pub const TEMP_DIR_ENV: &str = "MACIME_TEMP_DIR";
/// Selects the store backend: `file` or `plist`
pub const STORE_ENV: &str = "MACIME_STORE";
/// Overrides the property list used by the `plist` backend
pub const PREFS_FILE_ENV: &str = "MACIME_PREFS_FILE";

pub const DEFAULT_TEMP_DIR: &str = "/tmp/riodelphino.macime";
pub const PREFS_FILE_NAME: &str = "io.github.riodelphino.macime.plist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    File,
    Plist,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "plist" | "defaults" => Ok(StoreBackend::Plist),
            other => Err(Error::InvalidArgument(format!(
                "{} must be 'file' or 'plist', got '{}'",
                STORE_ENV, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub base_dir: PathBuf,
    pub prefs_file: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let backend = match get(STORE_ENV) {
            Some(value) => value.parse()?,
            None => StoreBackend::default(),
        };

        let base_dir = get(TEMP_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMP_DIR));

        let prefs_file = get(PREFS_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::preference_dir().map(|dir| dir.join(PREFS_FILE_NAME)))
            .unwrap_or_else(|| base_dir.join("sessions.plist"));

        Ok(Self {
            backend,
            base_dir,
            prefs_file,
        })
    }

    pub fn open_store(&self) -> Box<dyn SessionStore> {
        match self.backend {
            StoreBackend::File => {
                log::debug!("Using file store in {}", self.base_dir.display());
                Box::new(FileStore::new(&self.base_dir))
            }
            StoreBackend::Plist => {
                log::debug!("Using plist store at {}", self.prefs_file.display());
                Box::new(PlistStore::new(&self.prefs_file))
            }
        }
    }
}
