//! Types reported by the control plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a managed application as reported at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationStatus {
    Deleting,
    Starting,
    Stopping,
    Ready,
    Running,
    Updating,
    Autoscaling,
    ForceStopping,
    RollingBack,
    Maintenance,
    RolledBack,
    /// A status this build does not know about.
    Unknown(String),
}

impl ApplicationStatus {
    /// Parse the service's wire representation (e.g. `"READY"`).
    pub fn parse(value: &str) -> Self {
        match value {
            "DELETING" => Self::Deleting,
            "STARTING" => Self::Starting,
            "STOPPING" => Self::Stopping,
            "READY" => Self::Ready,
            "RUNNING" => Self::Running,
            "UPDATING" => Self::Updating,
            "AUTOSCALING" => Self::Autoscaling,
            "FORCE_STOPPING" => Self::ForceStopping,
            "ROLLING_BACK" => Self::RollingBack,
            "MAINTENANCE" => Self::Maintenance,
            "ROLLED_BACK" => Self::RolledBack,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Deleting => "DELETING",
            Self::Starting => "STARTING",
            Self::Stopping => "STOPPING",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Updating => "UPDATING",
            Self::Autoscaling => "AUTOSCALING",
            Self::ForceStopping => "FORCE_STOPPING",
            Self::RollingBack => "ROLLING_BACK",
            Self::Maintenance => "MAINTENANCE",
            Self::RolledBack => "ROLLED_BACK",
            Self::Unknown(other) => other,
        }
    }

    /// An application can only be started from `READY`.
    pub fn is_startable(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Read-only snapshot returned by a describe call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSnapshot {
    pub name: String,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<i64>,
}
