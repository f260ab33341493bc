//! Trait definitions for the control-plane module.

use async_trait::async_trait;

use super::error::ControlPlaneError;
use super::types::ApplicationSnapshot;
use crate::event::ApplicationRef;

/// Management API of the streaming-analytics service.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Returns the name of this implementation.
    fn name(&self) -> &str;

    /// Reads the current status of an application in its region.
    async fn describe_application(
        &self,
        application: &ApplicationRef,
    ) -> Result<ApplicationSnapshot, ControlPlaneError>;

    /// Requests a start. Returns once the request is accepted, not once the
    /// application is running.
    async fn start_application(&self, application: &ApplicationRef)
        -> Result<(), ControlPlaneError>;
}
