//! The event handler: filter a change event, then start the application if
//! it has settled into `READY`.

mod error;
mod processor;
mod types;

pub use error::HandlerError;
pub use processor::EventHandler;
pub use types::Outcome;
