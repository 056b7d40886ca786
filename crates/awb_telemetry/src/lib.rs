pub mod events;
pub mod setup;

pub use events::TelemetryEvent;
pub use setup::{TelemetryConfig, TelemetryError, init_telemetry};
