use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

use super::error::EventError;

/// Event name substituted when the detail carries none.
pub const UNKNOWN_EVENT_NAME: &str = "UnknownEventName";

const REGION_PATH: &str = "region";
const RESPONSE_ELEMENTS_PATH: &str = "detail.responseElements";
const APPLICATION_DETAIL_PATH: &str = "detail.responseElements.applicationDetail";
const APPLICATION_NAME_PATH: &str = "detail.responseElements.applicationDetail.applicationName";

/// A change-notification event as delivered by the event bus.
///
/// Fields the handler never reads are not decoded, so their shape cannot
/// affect how the event is handled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Identifier assigned by the event bus; logged only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Region of the control plane that emitted the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_detail",
        skip_serializing_if = "Option::is_none"
    )]
    pub detail: Option<EventDetail>,
}

/// The API call record carried in `detail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_elements: Option<Value>,
}

// `null` counts as absent. Any other non-object `detail` is present but
// carries nothing, so the event name falls back to the sentinel.
fn deserialize_detail<'de, D>(deserializer: D) -> Result<Option<EventDetail>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Object(mut map)) => Some(EventDetail {
            event_name: map.remove("eventName"),
            response_elements: map.remove("responseElements"),
        }),
        Some(_) => Some(EventDetail::default()),
    })
}

/// Kind of API call that produced the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    CreateApplication,
    UpdateApplication,
    Other(String),
}

impl EventKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "CreateApplication" => Self::CreateApplication,
            "UpdateApplication" => Self::UpdateApplication,
            other => Self::Other(other.to_string()),
        }
    }

    /// Only create and update calls can leave an application in `READY`.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::CreateApplication | Self::UpdateApplication)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateApplication => "CreateApplication",
            Self::UpdateApplication => "UpdateApplication",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (region, application name) pair identifying the target application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationRef {
    pub region: String,
    pub name: String,
}

impl ApplicationRef {
    pub fn new(region: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ApplicationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}

impl ChangeEvent {
    /// Decode a raw payload. Only a non-object payload is rejected.
    pub fn from_value(value: Value) -> Result<Self, EventError> {
        if !value.is_object() {
            return Err(EventError::NotAnObject {
                found: json_type(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Extract the target application from a create/update event.
    pub fn application_ref(&self) -> Result<ApplicationRef, EventError> {
        let region = string_at(self.region.as_ref(), REGION_PATH)?;

        let detail = self
            .detail
            .as_ref()
            .ok_or(EventError::MissingField { path: "detail" })?;
        let elements = object_at(detail.response_elements.as_ref(), RESPONSE_ELEMENTS_PATH)?;
        let application = object_at(elements.get("applicationDetail"), APPLICATION_DETAIL_PATH)?;
        let name = string_at(application.get("applicationName"), APPLICATION_NAME_PATH)?;

        Ok(ApplicationRef::new(region, name))
    }
}

impl EventDetail {
    /// The event name, or [`UNKNOWN_EVENT_NAME`] when absent.
    ///
    /// A non-string name is rendered as JSON and never matches a handled kind.
    pub fn event_name(&self) -> Cow<'_, str> {
        match &self.event_name {
            None | Some(Value::Null) => Cow::Borrowed(UNKNOWN_EVENT_NAME),
            Some(Value::String(name)) => Cow::Borrowed(name),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn kind(&self) -> EventKind {
        EventKind::parse(&self.event_name())
    }
}

/// A required non-empty string. Empty strings count as absent.
fn string_at<'a>(value: Option<&'a Value>, path: &'static str) -> Result<&'a str, EventError> {
    match value {
        None | Some(Value::Null) => Err(EventError::MissingField { path }),
        Some(Value::String(s)) if s.is_empty() => Err(EventError::MissingField { path }),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(EventError::InvalidField {
            path,
            expected: "a string",
            found: json_type(other),
        }),
    }
}

fn object_at<'a>(
    value: Option<&'a Value>,
    path: &'static str,
) -> Result<&'a Map<String, Value>, EventError> {
    match value {
        None | Some(Value::Null) => Err(EventError::MissingField { path }),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(EventError::InvalidField {
            path,
            expected: "an object",
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
