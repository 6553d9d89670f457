//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Record keys
// =============================================================================

/// Key under which every stored record carries its identifier
pub const ID_FIELD: &str = "_id";

/// Creation timestamp key stamped by the store on insert
pub const CREATED_AT_FIELD: &str = "created_at";

/// Update timestamp key stamped by the store on update
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// User email key (also the login lookup attribute)
pub const EMAIL_FIELD: &str = "email";

/// Stored password hash key
pub const HASHED_PASSWORD_FIELD: &str = "hashed_password";

/// Keys the store assigns; never taken from create input
pub const STORE_ASSIGNED_FIELDS: &[&str] = &[ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
