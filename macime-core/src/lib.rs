pub mod types;
pub mod error;
pub mod provider;
pub mod session;
pub mod config;
pub mod output;
pub mod workflow;
pub mod app;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use provider::InputSourceProvider;
pub use session::{FileStore, PlistStore, SessionStore, DEFAULT_SESSION_KEY};
pub use config::{StoreBackend, StoreConfig};
pub use output::{OutputFormat, View};
pub use workflow::{Persist, Selector, SwitchOutcome};
pub use app::Command;
