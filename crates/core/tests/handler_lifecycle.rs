//! Handler lifecycle integration tests.
//!
//! These tests drive the event handler through its public API with a mock
//! control plane:
//! - Relevance filtering by shape and event name
//! - The READY guard in front of the start call
//! - Failure suppression for extraction and control-plane errors

use serde_json::json;

use flink_autostart_core::{
    testing::{fixtures, MockControlPlane},
    ApplicationRef, ApplicationStatus, ChangeEvent, ControlPlaneError, EventHandler, Outcome,
};

/// Test helper holding a handler and a handle on its mock.
struct TestHarness {
    handler: EventHandler<MockControlPlane>,
    control_plane: MockControlPlane,
}

impl TestHarness {
    fn new() -> Self {
        let control_plane = MockControlPlane::new();
        Self {
            handler: EventHandler::new(control_plane.clone()),
            control_plane,
        }
    }

    async fn with_application(name: &str, status: ApplicationStatus) -> Self {
        let harness = Self::new();
        harness.control_plane.set_status(name, status).await;
        harness
    }
}

#[tokio::test]
async fn test_event_without_detail_makes_no_calls() {
    let harness = TestHarness::new();

    for event in [
        fixtures::event_without_detail("us-east-1"),
        ChangeEvent::default(),
        ChangeEvent::from_value(json!({ "region": "us-east-1", "detail": null })).unwrap(),
    ] {
        let outcome = harness.handler.handle(&event).await;
        assert_eq!(outcome, Outcome::IgnoredMissingDetail);
    }

    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_other_event_names_make_no_calls() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;

    for name in [
        "DeleteApplication",
        "StartApplication",
        "StopApplication",
        "AddApplicationOutput",
        "createApplication",
    ] {
        let outcome = harness
            .handler
            .handle(&fixtures::event(name, "us-east-1", "my-app"))
            .await;
        assert_eq!(
            outcome,
            Outcome::IgnoredEventName {
                event_name: name.to_string()
            }
        );
    }

    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_missing_event_name_is_ignored_as_unknown() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    let mut value = fixtures::event_value("CreateApplication", "us-east-1", "my-app");
    value["detail"]
        .as_object_mut()
        .unwrap()
        .remove("eventName");

    let outcome = harness.handler.handle_value(value).await;

    assert_eq!(
        outcome,
        Outcome::IgnoredEventName {
            event_name: "UnknownEventName".to_string()
        }
    );
    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_create_event_for_ready_application_starts_it() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;

    let payload = json!({
        "region": "us-east-1",
        "detail": {
            "eventName": "CreateApplication",
            "responseElements": {
                "applicationDetail": { "applicationName": "my-app" }
            }
        }
    });
    let outcome = harness.handler.handle_value(payload).await;

    let expected = ApplicationRef::new("us-east-1", "my-app");
    assert_eq!(
        outcome,
        Outcome::StartRequested {
            application: expected.clone()
        }
    );

    let starts = harness.control_plane.recorded_starts().await;
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].application, expected);
    assert!(starts[0].success);

    let describes = harness.control_plane.recorded_describes().await;
    assert_eq!(describes.len(), 1);
    assert_eq!(describes[0].application, expected);
}

#[tokio::test]
async fn test_update_event_for_running_application_is_noop() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Running).await;

    let outcome = harness
        .handler
        .handle(&fixtures::update_event("us-east-1", "my-app"))
        .await;

    assert_eq!(
        outcome,
        Outcome::StatusFiltered {
            application: ApplicationRef::new("us-east-1", "my-app"),
            status: ApplicationStatus::Running,
        }
    );
    assert_eq!(harness.control_plane.describe_count().await, 1);
    assert_eq!(harness.control_plane.start_count().await, 0);
}

#[tokio::test]
async fn test_duplicate_delivery_starts_once() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    let event = fixtures::create_event("us-east-1", "my-app");

    let first = harness.handler.handle(&event).await;
    let second = harness.handler.handle(&event).await;

    assert_eq!(first.label(), "start_requested");
    assert!(matches!(
        second,
        Outcome::StatusFiltered {
            status: ApplicationStatus::Starting,
            ..
        }
    ));
    assert_eq!(harness.control_plane.start_count().await, 1);
}

#[tokio::test]
async fn test_describe_failure_is_suppressed() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    harness
        .control_plane
        .set_describe_error(ControlPlaneError::Service {
            code: "ServiceUnavailableException".to_string(),
            message: "simulated outage".to_string(),
        })
        .await;

    let outcome = harness
        .handler
        .handle(&fixtures::create_event("us-east-1", "my-app"))
        .await;

    match outcome {
        Outcome::Failed { message } => assert!(message.contains("simulated outage")),
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert_eq!(harness.control_plane.start_count().await, 0);
}

#[tokio::test]
async fn test_unknown_application_is_suppressed() {
    let harness = TestHarness::new();

    let outcome = harness
        .handler
        .handle(&fixtures::create_event("us-east-1", "missing-app"))
        .await;

    assert!(outcome.is_failure());
    assert_eq!(harness.control_plane.describe_count().await, 1);
    assert_eq!(harness.control_plane.start_count().await, 0);
}

#[tokio::test]
async fn test_missing_application_name_is_suppressed() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    let mut value = fixtures::event_value("CreateApplication", "us-east-1", "my-app");
    value["detail"]["responseElements"]["applicationDetail"]
        .as_object_mut()
        .unwrap()
        .remove("applicationName");

    let outcome = harness.handler.handle_value(value).await;

    match outcome {
        Outcome::Failed { message } => assert!(message.contains("applicationName")),
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_missing_region_is_suppressed() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    let mut value = fixtures::event_value("UpdateApplication", "us-east-1", "my-app");
    value.as_object_mut().unwrap().remove("region");

    let outcome = harness.handler.handle_value(value).await;

    assert!(outcome.is_failure());
    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_region_from_event_is_used() {
    let harness = TestHarness::with_application("orders", ApplicationStatus::Ready).await;

    harness
        .handler
        .handle(&fixtures::create_event("ap-southeast-2", "orders"))
        .await;

    let starts = harness.control_plane.recorded_starts().await;
    assert_eq!(starts[0].application.region, "ap-southeast-2");
}

#[tokio::test]
async fn test_unread_fields_do_not_block_start() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;

    let payload = json!({
        "id": 98765,
        "time": "2024-03-01 12:00:00",
        "region": "us-east-1",
        "detail": {
            "eventName": "CreateApplication",
            "awsRegion": 1,
            "responseElements": {
                "applicationDetail": {
                    "applicationName": "my-app",
                    "applicationStatus": 3
                }
            }
        }
    });
    let outcome = harness.handler.handle_value(payload).await;

    assert_eq!(
        outcome,
        Outcome::StartRequested {
            application: ApplicationRef::new("us-east-1", "my-app")
        }
    );
    assert_eq!(harness.control_plane.start_count().await, 1);
}

#[tokio::test]
async fn test_wrong_typed_application_name_is_a_failure() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;

    let payload = json!({
        "region": "us-east-1",
        "detail": {
            "eventName": "CreateApplication",
            "responseElements": {
                "applicationDetail": { "applicationName": 42 }
            }
        }
    });
    let outcome = harness.handler.handle_value(payload).await;

    match outcome {
        Outcome::Failed { message } => assert!(message.contains("applicationName")),
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert_eq!(harness.control_plane.call_count().await, 0);
}

#[tokio::test]
async fn test_wrong_typed_region_is_a_failure() {
    let harness = TestHarness::with_application("my-app", ApplicationStatus::Ready).await;
    let mut value = fixtures::event_value("UpdateApplication", "us-east-1", "my-app");
    value["region"] = json!(["us-east-1"]);

    let outcome = harness.handler.handle_value(value).await;

    match outcome {
        Outcome::Failed { message } => assert!(message.contains("region")),
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert_eq!(harness.control_plane.call_count().await, 0);
}
