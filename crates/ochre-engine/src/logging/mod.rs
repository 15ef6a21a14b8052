//! Logging utilities.
//!
//! Centralizes logger initialization. Kept small on purpose; the crate only
//! assumes the standard `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
