use crate::error::{Error, Result};

/// Check that a session key can be used as a single file name.
///
/// Keys end up as `<base_dir>/<key>`, so anything that would escape the base
/// directory or name it is refused.
pub fn validate_session_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidArgument("session id must not be empty".to_string()));
    }

    if key == "." || key == ".." {
        return Err(Error::InvalidArgument(format!("session id '{}' is reserved", key)));
    }

    if key.contains('/') || key.contains('\0') {
        return Err(Error::InvalidArgument(format!(
            "session id '{}' must not contain '/' or NUL",
            key.escape_default()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_keys() {
        assert!(validate_session_key("DEFAULT").is_ok());
        assert!(validate_session_key("nvim-1234").is_ok());
        assert!(validate_session_key("with.dots").is_ok());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        for key in ["", ".", "..", "a/b", "../etc", "nul\0byte"] {
            assert!(
                matches!(validate_session_key(key), Err(Error::InvalidArgument(_))),
                "expected '{}' to be rejected",
                key.escape_default()
            );
        }
    }
}
