//! Spa Service Library
//!
//! Facade over the user, spa, service and booking repositories: validated
//! creates, pass-through reads and updates, typed delete failures and
//! password authentication.

pub mod config;
pub mod repository;
pub mod service;

pub use config::SpaServiceConfig;
pub use repository::{InMemoryRepository, Repository};
pub use service::Facade;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockRepository;
