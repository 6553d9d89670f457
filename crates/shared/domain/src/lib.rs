//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the spa-booking entities, their validated construction from stored
//! records, and password hashing.

pub mod booking;
pub mod constants;
pub mod error;
pub mod password;
pub mod record;
pub mod service;
pub mod spa;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use constants::*;
pub use error::{DomainError, DomainResult, FieldError, ValidationError};
pub use password::Password;
pub use record::{has_fields, missing_fields, FromRecord, Record};
pub use service::Service;
pub use spa::Spa;
pub use user::{User, UserResponse, UserRole};
