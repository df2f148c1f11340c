//! Get, list, set, load and toggle on top of a provider and a session store

use crate::error::{Error, Result};
use crate::provider::InputSourceProvider;
use crate::session::{session_key_or_default, SessionStore};
use crate::types::InputSourceRecord;

/// Whether a switch records the input source that was active before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist<'a> {
    No,
    /// Save the previous id under this session key (`None` is the default key)
    Session(Option<&'a str>),
}

impl<'a> Persist<'a> {
    pub fn from_flags(save: bool, session_key: Option<&'a str>) -> Self {
        if save {
            Persist::Session(session_key)
        } else {
            Persist::No
        }
    }
}

/// Result of a successful switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    /// Source active before the switch
    pub previous: InputSourceRecord,
    /// Source the switch selected
    pub selected: InputSourceRecord,
}

pub struct Selector<'a> {
    provider: &'a dyn InputSourceProvider,
    store: &'a dyn SessionStore,
}

impl<'a> Selector<'a> {
    pub fn new(provider: &'a dyn InputSourceProvider, store: &'a dyn SessionStore) -> Self {
        Self { provider, store }
    }

    pub fn get(&self) -> Result<InputSourceRecord> {
        self.provider.current()
    }

    pub fn list(&self, select_capable: bool) -> Result<Vec<InputSourceRecord>> {
        if select_capable {
            self.provider.select_capable_sources()
        } else {
            self.provider.sources()
        }
    }

    /// Switch to `target`. With persistence, the id active before the switch
    /// is saved, and only once the switch has succeeded.
    pub fn set(&self, target: &str, persist: Persist<'_>) -> Result<SwitchOutcome> {
        // Must be read before the switch, a later `load` restores this id
        let previous = self.provider.current()?;
        self.switch_from(previous, target, persist)
    }

    fn switch_from(
        &self,
        previous: InputSourceRecord,
        target: &str,
        persist: Persist<'_>,
    ) -> Result<SwitchOutcome> {
        // A store that cannot be prepared must fail the command before anything switches
        if let Persist::Session(_) = persist {
            self.store.ensure_ready()?;
        }

        log::debug!("Switching input source {} -> {}", previous.id, target);
        let selected = self.provider.select(target)?;

        if let Persist::Session(session_key) = persist {
            self.store.save(session_key, &previous.id)?;
            log::debug!(
                "Saved {} for session '{}'",
                previous.id,
                session_key_or_default(session_key)
            );
        }

        Ok(SwitchOutcome { previous, selected })
    }

    /// Restore the id saved for `session_key`. Nothing saved is not an error:
    /// no switch happens and `Ok(None)` is returned.
    pub fn load(&self, session_key: Option<&str>) -> Result<Option<InputSourceRecord>> {
        let Some(saved) = self.store.load(session_key)? else {
            log::debug!(
                "Nothing saved for session '{}'",
                session_key_or_default(session_key)
            );
            return Ok(None);
        };

        log::debug!("Restoring input source {}", saved);
        self.provider.select(&saved).map(Some)
    }

    /// Cycle through `targets`: select the entry after the current source,
    /// or the first entry when the current source is not among them.
    /// Empty entries (`a,,b` or a trailing comma) are skipped.
    pub fn toggle(&self, targets: &[String], persist: Persist<'_>) -> Result<SwitchOutcome> {
        let targets: Vec<&str> = targets
            .iter()
            .map(String::as_str)
            .filter(|id| !id.is_empty())
            .collect();
        if targets.is_empty() {
            return Err(Error::InvalidArgument("toggle needs at least one input source id".to_string()));
        }

        let current = self.provider.current()?;
        let next = match targets.iter().position(|id| *id == current.id) {
            Some(index) => targets[(index + 1) % targets.len()],
            None => targets[0],
        };

        self.switch_from(current, next, persist)
    }
}
