//! Record types and field validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Loose email syntax check: something, an `@`, something, a dot, something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A persisted user record.
///
/// Records are created only by [`RecordStore::append`](super::RecordStore::append)
/// and never mutated or deleted afterwards. The `id` equals the number of
/// records that existed before this one was appended, plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, monotonically assigned identifier (starting at 1).
    pub id: u64,

    /// Full name of the user.
    pub name: String,

    /// Email address (validated on input).
    pub email: String,

    /// Postal address.
    pub address: String,

    /// Phone number.
    pub phone: String,
}

/// Caller-supplied fields for a record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Full name of the user.
    pub name: String,

    /// Email address of the user.
    pub email: String,

    /// Postal address of the user.
    pub address: String,

    /// Phone number of the user.
    pub phone: String,
}

impl NewUser {
    /// Validate the field values: all fields non-empty, email well-formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Attach an id, producing a persistable record.
    pub fn into_record(self, id: u64) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            address: "1 Rd".to_string(),
            phone: "555".to_string(),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut user = valid_user();
        user.name = "   ".to_string();
        assert_eq!(
            user.validate(),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn test_empty_phone_rejected() {
        let mut user = valid_user();
        user.phone = String::new();
        assert_eq!(
            user.validate(),
            Err(ValidationError::MissingField("phone"))
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@x.com"] {
            let mut user = valid_user();
            user.email = email.to_string();
            assert!(
                matches!(user.validate(), Err(ValidationError::InvalidEmail(_))),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let record = valid_user().into_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@x.com");
    }
}
