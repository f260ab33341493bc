use serde::Serialize;

use crate::control_plane::ApplicationStatus;
use crate::event::ApplicationRef;

/// What a single invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Payload could not be decoded as an event.
    IgnoredUnrecognizedShape,
    /// Event carried no `detail`.
    IgnoredMissingDetail,
    /// Event name is not one we act on.
    IgnoredEventName { event_name: String },
    /// Application exists but is not in `READY`.
    StatusFiltered {
        application: ApplicationRef,
        status: ApplicationStatus,
    },
    /// Start request was accepted.
    StartRequested {
        application: ApplicationRef,
    },
    /// Something failed after filtering; already logged.
    Failed { message: String },
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::IgnoredUnrecognizedShape => "ignored_unrecognized_shape",
            Self::IgnoredMissingDetail => "ignored_missing_detail",
            Self::IgnoredEventName { .. } => "ignored_event_name",
            Self::StatusFiltered { .. } => "status_filtered",
            Self::StartRequested { .. } => "start_requested",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
