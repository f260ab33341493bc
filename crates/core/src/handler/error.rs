use thiserror::Error;

use crate::control_plane::ControlPlaneError;
use crate::event::EventError;

/// Any failure past the relevance filters. Caught and logged by the handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    ControlPlane(#[from] ControlPlaneError),
}
