//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration structures
//! - Logging initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use logging::init_logging;
