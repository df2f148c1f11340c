use macime_core::{InputSourceProvider, Result};

/// Input source registry of the running OS
pub fn create_provider() -> Result<Box<dyn InputSourceProvider>> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(macime_macos::TisProvider::new()))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(macime_core::Error::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}
