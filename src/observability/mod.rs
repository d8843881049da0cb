//! Observability module.
//!
//! Logging infrastructure for `bookkit` command runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
