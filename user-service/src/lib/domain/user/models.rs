use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::user::errors::EmailError;
use crate::user::errors::RoleError;
use crate::user::errors::UserIdError;
use crate::user::errors::UserNameError;

/// User aggregate entity.
///
/// `password_hash` never leaves the domain layer: the entity is deliberately
/// not serializable, and HTTP responses are built from explicit DTOs.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row data for a user that has not been persisted yet.
///
/// The id and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
}

/// User unique identifier type.
///
/// Identifiers are store-assigned integers, immutable and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// Accepts only all-digit strings; anything else is a validation
    /// failure, reported before any authorization or existence check.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is empty, non-numeric, or out of range
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserIdError::InvalidFormat(s.to_string()));
        }

        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| UserIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type, 2-255 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 255;

    /// Create a new valid name.
    ///
    /// # Errors
    /// * `TooShort` - fewer than 2 characters
    /// * `TooLong` - more than 255 characters
    pub fn new(name: String) -> Result<Self, UserNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length < Self::MIN_LENGTH {
            Err(UserNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type.
///
/// Trimmed, lowercased on construction, at most 255 characters, and
/// syntax-checked with an RFC 5322 compliant parser. Lowercasing here means
/// equality and the store's unique constraint are always case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 255;

    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `TooLong` - more than 255 characters
    /// * `InvalidFormat` - not valid email syntax
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();

        if email.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient identity of the caller, derived from a verified token or a
/// successful login.
///
/// Threaded explicitly into authorization decisions as a parameter; the
/// domain never reads caller identity from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub id: UserId,
    pub role: Role,
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: String,
    pub role: Role,
}

/// Command to update an existing user.
///
/// All fields optional to support partial updates, but the payload as a
/// whole must carry at least one field.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub name: Option<UserName>,
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_accepts_digits_only() {
        assert_eq!(UserId::from_string("42").unwrap(), UserId(42));
        assert!(UserId::from_string("").is_err());
        assert!(UserId::from_string("abc").is_err());
        assert!(UserId::from_string("-1").is_err());
        assert!(UserId::from_string("4.2").is_err());
        assert!(UserId::from_string("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(UserName::new("A".to_string()).is_err());
        assert!(UserName::new("Al".to_string()).is_ok());
        assert!(UserName::new("x".repeat(255)).is_ok());
        assert!(UserName::new("x".repeat(256)).is_err());
        // Trimming happens before the length check
        assert!(UserName::new("  A  ".to_string()).is_err());
    }

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  ANN@Example.com ".to_string()).unwrap();
        assert_eq!(email.as_str(), "ann@example.com");
    }

    #[test]
    fn test_email_rejects_bad_syntax() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            EmailAddress::new(long),
            Err(EmailError::TooLong { .. })
        ));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_update_command_is_empty() {
        assert!(UpdateUserCommand::default().is_empty());

        let command = UpdateUserCommand {
            name: Some(UserName::new("Ann".to_string()).unwrap()),
            ..Default::default()
        };
        assert!(!command.is_empty());
    }
}
