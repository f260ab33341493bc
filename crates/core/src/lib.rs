pub mod config;
pub mod control_plane;
pub mod event;
pub mod handler;
pub mod testing;

pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, Config,
    ConfigError, ControlPlaneConfig, LogFormat, LoggingConfig, CONFIG_PATH_ENV,
};
pub use control_plane::{
    ApplicationSnapshot, ApplicationStatus, ControlPlane, ControlPlaneError,
    KinesisAnalyticsControlPlane,
};
pub use event::{ApplicationRef, ChangeEvent, EventDetail, EventError, EventKind};
pub use handler::{EventHandler, HandlerError, Outcome};
