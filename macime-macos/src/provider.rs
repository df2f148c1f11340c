use crate::tis::*;
use core_foundation::array::CFArray;
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::string::{CFString, CFStringRef};
use macime_core::{Error, InputSourceProvider, InputSourceRecord, Result};

/// Owned reference to one TIS input source
struct InputSource(CFType);

impl InputSource {
    fn as_ptr(&self) -> TISInputSourceRef {
        self.0.as_CFTypeRef()
    }

    fn property(&self, key: CFStringRef) -> Option<CFType> {
        unsafe {
            let value = TISGetInputSourceProperty(self.as_ptr(), key);
            if value.is_null() {
                None
            } else {
                // Property values are owned by the input source
                Some(CFType::wrap_under_get_rule(value as CFTypeRef))
            }
        }
    }

    fn string_property(&self, key: CFStringRef) -> Option<String> {
        self.property(key)?
            .downcast::<CFString>()
            .map(|s| s.to_string())
    }

    fn bool_property(&self, key: CFStringRef) -> bool {
        self.property(key)
            .and_then(|value| value.downcast::<CFBoolean>())
            .map(bool::from)
            .unwrap_or(false)
    }

    fn languages(&self) -> Vec<String> {
        let key = unsafe { kTISPropertyInputSourceLanguages };
        let Some(array) = self.property(key).and_then(|value| value.downcast::<CFArray>()) else {
            return Vec::new();
        };

        array
            .get_all_values()
            .into_iter()
            .filter(|item| !item.is_null())
            .filter_map(|item| unsafe { CFType::wrap_under_get_rule(item as CFTypeRef) }.downcast::<CFString>())
            .map(|s| s.to_string())
            .collect()
    }

    fn id(&self) -> String {
        self.string_property(unsafe { kTISPropertyInputSourceID })
            .unwrap_or_default()
    }

    fn record(&self) -> InputSourceRecord {
        unsafe {
            InputSourceRecord {
                id: self.id(),
                localized_name: self
                    .string_property(kTISPropertyLocalizedName)
                    .unwrap_or_default(),
                is_select_capable: self.bool_property(kTISPropertyInputSourceIsSelectCapable),
                is_selected: self.bool_property(kTISPropertyInputSourceIsSelected),
                source_languages: self.languages(),
            }
        }
    }
}

/// Input source registry backed by Text Input Source Services
#[derive(Debug, Default)]
pub struct TisProvider;

impl TisProvider {
    pub fn new() -> Self {
        Self
    }

    /// Enabled input sources; installed-but-disabled ones are left out
    fn input_sources(&self) -> Vec<InputSource> {
        unsafe {
            let list = TISCreateInputSourceList(std::ptr::null(), 0);
            if list.is_null() {
                log::warn!("TISCreateInputSourceList returned NULL");
                return Vec::new();
            }

            let array: CFArray = CFArray::wrap_under_create_rule(list);
            array
                .get_all_values()
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| InputSource(CFType::wrap_under_get_rule(item as CFTypeRef)))
                .collect()
        }
    }
}

impl InputSourceProvider for TisProvider {
    fn sources(&self) -> Result<Vec<InputSourceRecord>> {
        Ok(self.input_sources().iter().map(InputSource::record).collect())
    }

    fn current(&self) -> Result<InputSourceRecord> {
        let source = unsafe {
            let current = TISCopyCurrentKeyboardInputSource();
            if current.is_null() {
                return Err(Error::NoCurrentSource);
            }
            InputSource(CFType::wrap_under_create_rule(current as CFTypeRef))
        };

        Ok(source.record())
    }

    fn select(&self, id: &str) -> Result<InputSourceRecord> {
        let source = self
            .input_sources()
            .into_iter()
            .find(|source| source.id() == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let status = unsafe { TISSelectInputSource(source.as_ptr()) };
        if status != 0 {
            return Err(Error::SelectFailed(id.to_string(), status));
        }
        log::debug!("TISSelectInputSource({}) succeeded", id);

        let mut record = source.record();
        record.is_selected = true;
        Ok(record)
    }
}
