//! AWS SDK backed control plane.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_kinesisanalyticsv2::config::{Builder as ClientConfigBuilder, Region};
use aws_sdk_kinesisanalyticsv2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_kinesisanalyticsv2::Client;
use std::error::Error as StdError;
use std::fmt::Debug;
use tracing::debug;

use super::error::ControlPlaneError;
use super::traits::ControlPlane;
use super::types::{ApplicationSnapshot, ApplicationStatus};
use crate::event::ApplicationRef;

/// Control plane backed by the Kinesis Analytics v2 API.
///
/// Holds the shared SDK configuration and builds a client scoped to the
/// region of each request, since events can originate in any region.
#[derive(Debug, Clone)]
pub struct KinesisAnalyticsControlPlane {
    sdk_config: SdkConfig,
}

impl KinesisAnalyticsControlPlane {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    /// Load credentials and defaults from the environment.
    pub async fn from_env(endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }
        Self::new(loader.load().await)
    }

    fn client_for(&self, region: &str) -> Client {
        let config = ClientConfigBuilder::from(&self.sdk_config)
            .region(Region::new(region.to_string()))
            .build();
        Client::from_conf(config)
    }
}

#[async_trait]
impl ControlPlane for KinesisAnalyticsControlPlane {
    fn name(&self) -> &str {
        "kinesisanalyticsv2"
    }

    async fn describe_application(
        &self,
        application: &ApplicationRef,
    ) -> Result<ApplicationSnapshot, ControlPlaneError> {
        let output = self
            .client_for(&application.region)
            .describe_application()
            .application_name(&application.name)
            .send()
            .await
            .map_err(|e| classify("DescribeApplication", application, e))?;

        let detail = output
            .application_detail()
            .ok_or(ControlPlaneError::MissingResponseField("ApplicationDetail"))?;

        debug!(
            application = %application,
            response = ?detail,
            "describe_application response"
        );

        Ok(ApplicationSnapshot {
            name: application.name.clone(),
            status: ApplicationStatus::parse(detail.application_status().as_str()),
            version_id: Some(detail.application_version_id()),
        })
    }

    async fn start_application(
        &self,
        application: &ApplicationRef,
    ) -> Result<(), ControlPlaneError> {
        self.client_for(&application.region)
            .start_application()
            .application_name(&application.name)
            .send()
            .await
            .map_err(|e| classify("StartApplication", application, e))?;

        Ok(())
    }
}

/// Map an SDK failure onto the control-plane error taxonomy.
fn classify<E, R>(
    operation: &str,
    application: &ApplicationRef,
    err: SdkError<E, R>,
) -> ControlPlaneError
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    if matches!(err, SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) {
        return ControlPlaneError::Transport(message);
    }
    if matches!(err, SdkError::ConstructionFailure(_)) {
        return ControlPlaneError::InvalidRequest(message);
    }

    match err.code() {
        Some("ResourceNotFoundException") => ControlPlaneError::NotFound {
            application: application.to_string(),
        },
        Some("AccessDeniedException") | Some("UnrecognizedClientException") => {
            ControlPlaneError::PermissionDenied {
                operation: operation.to_string(),
                message,
            }
        }
        Some("ResourceInUseException") | Some("ConcurrentModificationException") => {
            ControlPlaneError::Conflict {
                application: application.to_string(),
                message,
            }
        }
        Some("InvalidArgumentException")
        | Some("InvalidRequestException")
        | Some("InvalidApplicationConfigurationException")
        | Some("ValidationException") => ControlPlaneError::InvalidRequest(message),
        Some(code) => ControlPlaneError::Service {
            code: code.to_string(),
            message,
        },
        None => ControlPlaneError::Service {
            code: "Unknown".to_string(),
            message,
        },
    }
}
