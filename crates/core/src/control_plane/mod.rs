//! Control-plane access for managed Flink applications.
//!
//! This module provides the `ControlPlane` trait and the AWS SDK backed
//! implementation used in production. The handler only needs two calls:
//!
//! - describe an application to read its current status
//! - start an application without waiting for it to reach `RUNNING`
//!
//! # Example
//!
//! ```ignore
//! use flink_autostart_core::control_plane::{ControlPlane, KinesisAnalyticsControlPlane};
//! use flink_autostart_core::event::ApplicationRef;
//!
//! let control_plane = KinesisAnalyticsControlPlane::from_env(None).await;
//! let app = ApplicationRef::new("us-east-1", "my-app");
//!
//! let snapshot = control_plane.describe_application(&app).await?;
//! if snapshot.status.is_startable() {
//!     control_plane.start_application(&app).await?;
//! }
//! ```

mod error;
mod kinesis;
mod traits;
mod types;

pub use error::ControlPlaneError;
pub use kinesis::KinesisAnalyticsControlPlane;
pub use traits::ControlPlane;
pub use types::{ApplicationSnapshot, ApplicationStatus};
