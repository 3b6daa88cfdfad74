//! Application id validator
//!
//! The application id is pasted into every include guard, so it has to be a
//! valid C identifier made of at least three `_`-separated segments, e.g.
//! `com_example_AppName`.

use once_cell::sync::Lazy;
use regex::Regex;

static APPLICATION_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][0-9A-Za-z_]+_[0-9A-Za-z_]+_[0-9A-Za-z_]+$")
        .expect("application id pattern is a valid regex")
});

/// An application id that does not match the required format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The rejected value, as given.
    pub value: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "application-id '{}' is not valid. It must be in the format com_example_AppName",
            self.value
        )
    }
}

impl std::error::Error for ValidationError {}

/// Returns `true` if `id` can be used as an application id.
pub fn is_valid_application_id(id: &str) -> bool {
    APPLICATION_ID.is_match(id)
}

/// Check an application id, returning the rejected value on failure.
pub fn validate_application_id(id: &str) -> Result<(), ValidationError> {
    if is_valid_application_id(id) {
        Ok(())
    } else {
        Err(ValidationError {
            value: id.to_string(),
        })
    }
}
