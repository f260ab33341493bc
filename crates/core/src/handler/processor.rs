use tracing::{debug, error, info};

use super::error::HandlerError;
use super::types::Outcome;
use crate::control_plane::ControlPlane;
use crate::event::ChangeEvent;

/// Reacts to application create/update events by starting applications that
/// have settled into `READY`.
///
/// Each call is independent: nothing is remembered between events, nothing
/// is retried, and no failure escapes [`EventHandler::handle`].
pub struct EventHandler<C: ControlPlane> {
    control_plane: C,
}

impl<C: ControlPlane> EventHandler<C> {
    pub fn new(control_plane: C) -> Self {
        Self { control_plane }
    }

    pub fn control_plane(&self) -> &C {
        &self.control_plane
    }

    /// Decode a raw payload and handle it.
    pub async fn handle_value(&self, payload: serde_json::Value) -> Outcome {
        match ChangeEvent::from_value(payload) {
            Ok(event) => self.handle(&event).await,
            Err(e) => {
                info!(error = %e, "Ignoring - unrecognized event shape");
                Outcome::IgnoredUnrecognizedShape
            }
        }
    }

    /// Handle one event. At most one start request is issued.
    pub async fn handle(&self, event: &ChangeEvent) -> Outcome {
        let Some(detail) = event.detail.as_ref() else {
            info!(event = ?event, "Ignoring - missing .detail");
            return Outcome::IgnoredMissingDetail;
        };

        let kind = detail.kind();
        info!(event_name = %kind, event_id = ?event.id, "Incoming event");
        debug!(event = ?event, "Incoming event payload");

        if !kind.is_actionable() {
            info!(event_name = %kind, "Ignoring - event name not handled");
            return Outcome::IgnoredEventName {
                event_name: kind.to_string(),
            };
        }

        match self.start_if_ready(event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, event_name = %kind, "Failed to handle event");
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn start_if_ready(&self, event: &ChangeEvent) -> Result<Outcome, HandlerError> {
        let application = event.application_ref()?;

        let snapshot = self
            .control_plane
            .describe_application(&application)
            .await?;
        debug!(
            application = %application,
            status = %snapshot.status,
            version_id = ?snapshot.version_id,
            "Described application"
        );

        if !snapshot.status.is_startable() {
            info!(
                application = %application,
                status = %snapshot.status,
                "No-op - application status is filtered"
            );
            return Ok(Outcome::StatusFiltered {
                application,
                status: snapshot.status,
            });
        }

        self.control_plane.start_application(&application).await?;
        info!(
            application = %application,
            control_plane = self.control_plane.name(),
            "Started application"
        );

        Ok(Outcome::StartRequested { application })
    }
}
