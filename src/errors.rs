use thiserror::Error;

/// Error types for loading the plugin init configuration.
///
/// Resetting a configuration never fails; every variant here comes from
/// reading an external payload or from validating the loaded values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not valid JSON, or a recognized key holds a value of
    /// the wrong type.
    #[error("malformed plugin config payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The payload parsed as JSON but is not an object.
    #[error("plugin config payload must be a JSON object")]
    NotAnObject,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
