//! Error types for the control-plane module.

use thiserror::Error;

/// Errors returned by control-plane calls.
#[derive(Debug, Error)]
pub enum ControlPlaneError {
    /// The application does not exist in the region.
    #[error("Application not found: {application}")]
    NotFound { application: String },

    /// The caller is not allowed to perform the operation.
    #[error("Permission denied for {operation}: {message}")]
    PermissionDenied { operation: String, message: String },

    /// The application is in a state that conflicts with the request.
    #[error("Conflicting application state for {application}: {message}")]
    Conflict { application: String, message: String },

    /// The request was rejected as invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request never produced a service response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Any other error reported by the service.
    #[error("Service error ({code}): {message}")]
    Service { code: String, message: String },

    /// The service response lacked a field the caller relies on.
    #[error("Response missing field: {0}")]
    MissingResponseField(&'static str),
}

impl ControlPlaneError {
    /// Whether a later attempt could succeed. Informational; nothing retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Service { code, .. } => {
                code.contains("Throttl") || code == "LimitExceededException"
            }
            _ => false,
        }
    }
}
