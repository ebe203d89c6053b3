//! Logging setup.
//!
//! The crate itself only talks to the `log` facade. Hosts that have no
//! logger of their own can install the `env_logger` backend here.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
