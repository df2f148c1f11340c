#![allow(dead_code)]

use macime_core::{Error, FileStore, InputSourceProvider, InputSourceRecord, Result};
use std::cell::{Cell, RefCell};
use tempfile::TempDir;

/// In-memory input source registry with scripted contents
pub struct FakeProvider {
    sources: RefCell<Vec<InputSourceRecord>>,
    /// Status returned by every select when set
    select_status: Cell<Option<i32>>,
    select_calls: RefCell<Vec<String>>,
}

impl FakeProvider {
    pub fn new(sources: Vec<InputSourceRecord>) -> Self {
        Self {
            sources: RefCell::new(sources),
            select_status: Cell::new(None),
            select_calls: RefCell::new(Vec::new()),
        }
    }

    /// A registry where `active` is selected among the standard test sources
    pub fn with_active(active: &str) -> Self {
        let sources = standard_sources()
            .into_iter()
            .map(|s| {
                let selected = s.id == active;
                s.with_selected(selected)
            })
            .collect();
        Self::new(sources)
    }

    pub fn fail_selects_with(&self, status: i32) {
        self.select_status.set(Some(status));
    }

    pub fn current_id(&self) -> Option<String> {
        self.sources
            .borrow()
            .iter()
            .find(|s| s.is_selected)
            .map(|s| s.id.clone())
    }

    pub fn select_calls(&self) -> Vec<String> {
        self.select_calls.borrow().clone()
    }
}

impl InputSourceProvider for FakeProvider {
    fn sources(&self) -> Result<Vec<InputSourceRecord>> {
        Ok(self.sources.borrow().clone())
    }

    fn current(&self) -> Result<InputSourceRecord> {
        self.sources
            .borrow()
            .iter()
            .find(|s| s.is_selected)
            .cloned()
            .ok_or(Error::NoCurrentSource)
    }

    fn select(&self, id: &str) -> Result<InputSourceRecord> {
        self.select_calls.borrow_mut().push(id.to_string());

        let mut sources = self.sources.borrow_mut();
        if !sources.iter().any(|s| s.id == id) {
            return Err(Error::NotFound(id.to_string()));
        }
        if let Some(status) = self.select_status.get() {
            return Err(Error::SelectFailed(id.to_string(), status));
        }

        for source in sources.iter_mut() {
            source.is_selected = source.id == id;
        }
        Ok(sources.iter().find(|s| s.id == id).cloned().unwrap())
    }
}

pub const ABC: &str = "com.apple.keylayout.ABC";
pub const KOTOERI: &str = "com.apple.inputmethod.Kotoeri.RomajiTyping.Japanese";
pub const PINYIN: &str = "com.apple.inputmethod.SCIM.ITABC";
pub const PALETTE: &str = "com.apple.CharacterPaletteIM";

/// Three selectable keyboards and one informational source
pub fn standard_sources() -> Vec<InputSourceRecord> {
    vec![
        InputSourceRecord::new(ABC, "ABC").with_languages(["en"]),
        InputSourceRecord::new(KOTOERI, "Romaji").with_languages(["ja", "en"]),
        InputSourceRecord::new(PINYIN, "Pinyin - Simplified").with_languages(["zh-Hans"]),
        InputSourceRecord::new(PALETTE, "Emoji & Symbols").with_select_capable(false),
    ]
}

/// File store rooted in a fresh temp dir; keep the `TempDir` alive for the test
pub fn temp_file_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path().join("sessions"));
    (dir, store)
}
