pub mod input_source;
pub mod session_key;

pub use input_source::InputSourceRecord;
pub use session_key::validate_session_key;
