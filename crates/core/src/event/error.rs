use thiserror::Error;

/// Errors raised while decoding or reading an inbound event.
#[derive(Debug, Error)]
pub enum EventError {
    /// The payload is not a JSON object.
    #[error("Event payload is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// The payload could not be decoded into the event shape at all.
    #[error("Malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field required for acting on the event is absent.
    #[error("Missing field in event: {path}")]
    MissingField { path: &'static str },

    /// A field required for acting on the event has the wrong JSON type.
    #[error("Invalid field in event: {path} must be {expected}, found {found}")]
    InvalidField {
        path: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
