//! Testing utilities and mock implementations.
//!
//! This module provides a mock control plane so the handler can be exercised
//! end to end without cloud credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use flink_autostart_core::testing::{fixtures, MockControlPlane};
//!
//! let control_plane = MockControlPlane::new();
//! control_plane.set_status("my-app", ApplicationStatus::Ready).await;
//!
//! let handler = EventHandler::new(control_plane.clone());
//! handler.handle(&fixtures::create_event("us-east-1", "my-app")).await;
//!
//! assert_eq!(control_plane.start_count().await, 1);
//! ```

mod mock_control_plane;

pub use mock_control_plane::{MockControlPlane, RecordedCall};

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::event::ChangeEvent;

    /// Raw payload of an API-call event for the given event name.
    pub fn event_value(event_name: &str, region: &str, application_name: &str) -> Value {
        json!({
            "version": "0",
            "id": "c7b5c2a4-0d1e-4c5f-9f0e-1a2b3c4d5e6f",
            "detail-type": "AWS API Call via CloudTrail",
            "source": "aws.kinesisanalytics",
            "account": "123456789012",
            "time": "2024-03-01T12:00:00Z",
            "region": region,
            "resources": [],
            "detail": {
                "eventVersion": "1.08",
                "eventSource": "kinesisanalytics.amazonaws.com",
                "eventName": event_name,
                "awsRegion": region,
                "responseElements": {
                    "applicationDetail": {
                        "applicationName": application_name,
                        "applicationARN": format!(
                            "arn:aws:kinesisanalytics:{}:123456789012:application/{}",
                            region, application_name
                        ),
                        "applicationStatus": "READY",
                        "applicationVersionId": 1
                    }
                }
            }
        })
    }

    /// Decoded API-call event for the given event name.
    pub fn event(event_name: &str, region: &str, application_name: &str) -> ChangeEvent {
        ChangeEvent::from_value(event_value(event_name, region, application_name))
            .expect("fixture event decodes")
    }

    pub fn create_event(region: &str, application_name: &str) -> ChangeEvent {
        event("CreateApplication", region, application_name)
    }

    pub fn update_event(region: &str, application_name: &str) -> ChangeEvent {
        event("UpdateApplication", region, application_name)
    }

    /// An event bus payload that is not an API-call record.
    pub fn event_without_detail(region: &str) -> ChangeEvent {
        ChangeEvent::from_value(json!({
            "version": "0",
            "id": "0d6f7a1e-3b2c-4e5d-8f9a-0b1c2d3e4f5a",
            "detail-type": "Scheduled Event",
            "source": "aws.kinesisanalytics",
            "region": region,
        }))
        .expect("fixture event decodes")
    }
}
