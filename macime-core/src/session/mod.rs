//! Persistence of the previously active input source.
//!
//! A session store remembers one input source id per session key across
//! process invocations. Two backends exist: one flat file per key
//! ([`FileStore`]) and a single property list holding every key
//! ([`PlistStore`]). Both replace their files atomically, so a concurrent
//! reader never sees a partial write. The last writer wins.

mod file;
mod prefs;

pub use file::FileStore;
pub use prefs::PlistStore;

use crate::error::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Key used when the caller does not name a session
pub const DEFAULT_SESSION_KEY: &str = "DEFAULT";

pub trait SessionStore {
    /// Location backing `session_key`. Never fails and has no side effects.
    fn resolve_storage_path(&self, session_key: Option<&str>) -> PathBuf;

    /// Create the storage directory if it is missing. Idempotent.
    fn ensure_ready(&self) -> Result<()>;

    /// Replace the value stored for `session_key`
    fn save(&self, session_key: Option<&str>, value: &str) -> Result<()>;

    /// Read the value stored for `session_key`.
    ///
    /// `Ok(None)` means nothing has been saved yet. Storage that exists but
    /// cannot be read is an error.
    fn load(&self, session_key: Option<&str>) -> Result<Option<String>>;
}

/// Resolve the session key, falling back to [`DEFAULT_SESSION_KEY`]
pub fn session_key_or_default(session_key: Option<&str>) -> &str {
    session_key.unwrap_or(DEFAULT_SESSION_KEY)
}

/// `<base_dir>/<session key>`
pub fn resolve_storage_path(base_dir: &Path, session_key: Option<&str>) -> PathBuf {
    base_dir.join(session_key_or_default(session_key))
}

/// Stored values are raw ids; surrounding whitespace is noise and an empty
/// value means nothing was saved.
pub(crate) fn normalize_stored_value(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Write `contents` to a temp file next to `path`, then rename it over `path`
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    // NamedTempFile starts out as 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
