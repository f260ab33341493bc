//! Inbound change-notification events.
//!
//! Events arrive as loosely-shaped JSON. Only the fields the handler reads
//! are modelled, and they stay raw JSON until the handler asks for them, so
//! presence and type are checked explicitly at the point of use.

mod error;
mod types;

pub use error::EventError;
pub use types::{ApplicationRef, ChangeEvent, EventDetail, EventKind, UNKNOWN_EVENT_NAME};
