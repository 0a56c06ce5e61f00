//! Logging for the alert pipeline.

mod logging;

pub use logging::{setup_logging, LogFormat};
