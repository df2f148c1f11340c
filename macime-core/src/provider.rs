//! Access to the system input source registry.
//!
//! The registry is global OS state, so everything that reads or switches
//! input sources goes through this trait. The macOS implementation lives in
//! the `macime-macos` crate; tests use a scripted fake.

use crate::error::Result;
use crate::types::InputSourceRecord;

pub trait InputSourceProvider {
    /// All enabled input sources, in registry order
    fn sources(&self) -> Result<Vec<InputSourceRecord>>;

    /// The active keyboard input source.
    ///
    /// Fails with `Error::NoCurrentSource` when the registry reports none.
    fn current(&self) -> Result<InputSourceRecord>;

    /// Make `id` the active input source.
    ///
    /// Fails with `Error::NotFound` when no enabled source has that id, and
    /// with `Error::SelectFailed` when the registry refuses the switch.
    fn select(&self, id: &str) -> Result<InputSourceRecord>;

    fn select_capable_sources(&self) -> Result<Vec<InputSourceRecord>> {
        Ok(self
            .sources()?
            .into_iter()
            .filter(|source| source.is_select_capable)
            .collect())
    }
}
