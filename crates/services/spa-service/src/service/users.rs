//! User operations and authentication.

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument};

use common::AppResult;
use domain::{
    has_fields, FromRecord, Password, Record, User, ValidationError, EMAIL_FIELD,
    HASHED_PASSWORD_FIELD,
};

use super::facade::{delete_logged, insert_validated, Facade, USERS};

/// Checked in place of a real hash whenever the lookup is rejected, so
/// every path runs exactly one Argon2 verification.
static DECOY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("decoy-password-never-matches").ok());

/// Why a login attempt was turned down.
///
/// Only ever logged: callers of [`Facade::authenticate_user`] see `None`
/// for every variant.
#[derive(Debug, Error)]
enum AuthRejection {
    #[error("no user with that email")]
    UnknownEmail,
    #[error("stored record lacks email or hashed_password")]
    IncompleteRecord,
    #[error("stored record is invalid: {0}")]
    InvalidRecord(ValidationError),
    #[error("password mismatch")]
    WrongPassword,
}

fn lookup_user(record: Option<Record>) -> Result<User, AuthRejection> {
    let record = record.ok_or(AuthRejection::UnknownEmail)?;
    if !has_fields(&record, &[EMAIL_FIELD, HASHED_PASSWORD_FIELD]) {
        return Err(AuthRejection::IncompleteRecord);
    }
    User::from_record(&record).map_err(AuthRejection::InvalidRecord)
}

/// The user's own hash, or the decoy for a rejected lookup
fn hash_to_verify(user: &Result<User, AuthRejection>) -> Option<Password> {
    match user {
        Ok(user) => Some(Password::from_hash(user.hashed_password.as_str())),
        Err(_) => (*DECOY_PASSWORD).clone(),
    }
}

fn check_credentials(record: Option<Record>, password: &str) -> Result<User, AuthRejection> {
    let user = lookup_user(record);
    let matched = hash_to_verify(&user).map_or(false, |hash| hash.verify(password));

    match user {
        Ok(user) if matched => Ok(user),
        Ok(_) => Err(AuthRejection::WrongPassword),
        Err(rejection) => Err(rejection),
    }
}

impl Facade {
    /// Validate and store a new user, returning the repository's id.
    #[instrument(skip(self, data))]
    pub async fn create_user(&self, data: &Record) -> AppResult<String> {
        insert_validated::<User>(self.users.as_ref(), USERS, data).await
    }

    /// Forward raw changes to the store; no local validation.
    #[instrument(skip(self, data))]
    pub async fn update_user(&self, id: &str, data: Record) -> AppResult<Record> {
        self.users.update(id, data).await
    }

    pub async fn get_user_by_attribute(&self, name: &str, value: &Value) -> AppResult<Option<Record>> {
        self.users.get_by_attribute(name, value).await
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<Option<Record>> {
        self.users.get_by_id(id).await
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<Record>> {
        self.users.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        delete_logged(self.users.as_ref(), USERS, id).await
    }

    /// Look up a user by email and check the password.
    ///
    /// Returns `Ok(None)` for an unknown email, an incomplete or invalid
    /// stored record, and a wrong password alike; the cause is deliberately
    /// not exposed. Only storage failures surface as `Err`.
    #[instrument(skip(self, password))]
    pub async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let record = self
            .users
            .get_by_attribute(EMAIL_FIELD, &Value::String(email.to_string()))
            .await?;

        match check_credentials(record, password) {
            Ok(user) => {
                info!(user_id = ?user.id, "user authenticated");
                Ok(Some(user))
            }
            Err(rejection) => {
                debug!(reason = %rejection, "authentication rejected");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    fn stored_user(password: &str) -> Record {
        let hash = Password::new(password).unwrap().into_string();
        record(json!({ "_id": "u1", "email": "a@b.com", "hashed_password": hash }))
    }

    #[test]
    fn test_check_credentials_success() {
        let user = check_credentials(Some(stored_user("correctpw")), "correctpw").unwrap();

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_check_credentials_unknown_email() {
        assert!(matches!(
            check_credentials(None, "whatever"),
            Err(AuthRejection::UnknownEmail)
        ));
    }

    #[test]
    fn test_check_credentials_incomplete_record() {
        let rec = record(json!({ "email": "a@b.com" }));

        assert!(matches!(
            check_credentials(Some(rec), "correctpw"),
            Err(AuthRejection::IncompleteRecord)
        ));
    }

    #[test]
    fn test_check_credentials_invalid_record() {
        let rec = record(json!({ "email": "a@b.com", "hashed_password": "H", "role": "wizard" }));

        assert!(matches!(
            check_credentials(Some(rec), "correctpw"),
            Err(AuthRejection::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_check_credentials_wrong_password() {
        assert!(matches!(
            check_credentials(Some(stored_user("correctpw")), "wrongpw"),
            Err(AuthRejection::WrongPassword)
        ));
    }

    #[test]
    fn test_rejected_lookups_verify_against_decoy() {
        let decoy = (*DECOY_PASSWORD).clone();
        assert!(decoy.is_some());

        let rejected = [
            None,
            Some(record(json!({ "email": "a@b.com" }))),
            Some(record(json!({ "email": "a@b.com", "hashed_password": "H", "role": "wizard" }))),
        ];
        for rec in rejected {
            let user = lookup_user(rec);
            assert!(user.is_err());
            assert_eq!(hash_to_verify(&user), decoy);
        }

        let user = lookup_user(Some(stored_user("correctpw")));
        assert_ne!(hash_to_verify(&user), decoy);
    }
}
