//! Mock control plane for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::control_plane::{
    ApplicationSnapshot, ApplicationStatus, ControlPlane, ControlPlaneError,
};
use crate::event::ApplicationRef;

/// A recorded control-plane call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The application the call targeted.
    pub application: ApplicationRef,
    /// Whether the call succeeded.
    pub success: bool,
}

/// Mock implementation of the ControlPlane trait.
///
/// Provides controllable behavior for testing:
/// - Scripted application statuses by name
/// - Injected errors for the next describe or start call
/// - Recorded calls for assertions
///
/// Applications without a scripted status are reported as not found.
#[derive(Debug, Clone, Default)]
pub struct MockControlPlane {
    statuses: Arc<RwLock<HashMap<String, ApplicationStatus>>>,
    describes: Arc<RwLock<Vec<RecordedCall>>>,
    starts: Arc<RwLock<Vec<RecordedCall>>>,
    next_describe_error: Arc<RwLock<Option<ControlPlaneError>>>,
    next_start_error: Arc<RwLock<Option<ControlPlaneError>>>,
}

impl MockControlPlane {
    /// Create a new mock control plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status reported for an application.
    pub async fn set_status(&self, application_name: &str, status: ApplicationStatus) {
        self.statuses
            .write()
            .await
            .insert(application_name.to_string(), status);
    }

    /// Current scripted status of an application.
    pub async fn status(&self, application_name: &str) -> Option<ApplicationStatus> {
        self.statuses.read().await.get(application_name).cloned()
    }

    /// Configure the next describe call to fail with the given error.
    pub async fn set_describe_error(&self, error: ControlPlaneError) {
        *self.next_describe_error.write().await = Some(error);
    }

    /// Configure the next start call to fail with the given error.
    pub async fn set_start_error(&self, error: ControlPlaneError) {
        *self.next_start_error.write().await = Some(error);
    }

    pub async fn recorded_describes(&self) -> Vec<RecordedCall> {
        self.describes.read().await.clone()
    }

    pub async fn recorded_starts(&self) -> Vec<RecordedCall> {
        self.starts.read().await.clone()
    }

    pub async fn describe_count(&self) -> usize {
        self.describes.read().await.len()
    }

    pub async fn start_count(&self) -> usize {
        self.starts.read().await.len()
    }

    /// Total outbound calls of either kind.
    pub async fn call_count(&self) -> usize {
        self.describe_count().await + self.start_count().await
    }

    async fn record(
        calls: &RwLock<Vec<RecordedCall>>,
        application: &ApplicationRef,
        success: bool,
    ) {
        calls.write().await.push(RecordedCall {
            application: application.clone(),
            success,
        });
    }
}

#[async_trait]
impl ControlPlane for MockControlPlane {
    fn name(&self) -> &str {
        "mock"
    }

    async fn describe_application(
        &self,
        application: &ApplicationRef,
    ) -> Result<ApplicationSnapshot, ControlPlaneError> {
        if let Some(err) = self.next_describe_error.write().await.take() {
            Self::record(&self.describes, application, false).await;
            return Err(err);
        }

        let Some(status) = self.status(&application.name).await else {
            Self::record(&self.describes, application, false).await;
            return Err(ControlPlaneError::NotFound {
                application: application.to_string(),
            });
        };

        Self::record(&self.describes, application, true).await;
        Ok(ApplicationSnapshot {
            name: application.name.clone(),
            status,
            version_id: Some(1),
        })
    }

    async fn start_application(
        &self,
        application: &ApplicationRef,
    ) -> Result<(), ControlPlaneError> {
        if let Some(err) = self.next_start_error.write().await.take() {
            Self::record(&self.starts, application, false).await;
            return Err(err);
        }

        let mut statuses = self.statuses.write().await;
        let result = match statuses.get(&application.name).cloned() {
            Some(ApplicationStatus::Ready) => {
                statuses.insert(application.name.clone(), ApplicationStatus::Starting);
                Ok(())
            }
            Some(status) => Err(ControlPlaneError::Conflict {
                application: application.to_string(),
                message: format!("application is {}", status),
            }),
            None => Err(ControlPlaneError::NotFound {
                application: application.to_string(),
            }),
        };
        drop(statuses);

        Self::record(&self.starts, application, result.is_ok()).await;
        result
    }
}
