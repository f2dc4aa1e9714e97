use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod authenticate;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// Sanitized user representation returned to callers.
///
/// The password hash has no field here, so it cannot leak regardless of
/// which handler builds the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Field-level detail attached to validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl ToString) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

/// API boundary error, translated to a structured JSON response.
///
/// Every response body carries a `message` field; validation failures
/// additionally carry structured `errors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl ToString) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(json!({ "message": message }))).into_response()
            }
            ApiError::InternalServerError(message) => {
                // Full context stays in the logs; the caller gets a generic message
                tracing::error!(error = %message, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::InvalidUserId(_) => ApiError::validation("id", message),
            UserError::InvalidName(_) => ApiError::validation("name", message),
            UserError::InvalidEmail(_) => ApiError::validation("email", message),
            UserError::InvalidRole(_) => ApiError::validation("role", message),
            UserError::NoFieldsToUpdate => ApiError::validation("body", message),
            UserError::SelfDeletion => ApiError::validation("id", message),
            UserError::NotFound(_) => ApiError::NotFound(message),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(message),
            UserError::Forbidden(_) => ApiError::Forbidden(message),
            UserError::InvalidCredentials => ApiError::Unauthorized(message),
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::UserIdError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = ApiError::from(UserError::InvalidUserId(UserIdError::InvalidFormat(
            "abc".to_string(),
        )));
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors[0].field, "id");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_self_deletion_is_a_validation_failure() {
        assert!(matches!(
            ApiError::from(UserError::SelfDeletion),
            ApiError::Validation(_)
        ));
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        assert!(matches!(
            ApiError::from(UserError::EmailAlreadyExists("a@b.com".to_string())),
            ApiError::Conflict(_)
        ));
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let value = serde_json::to_value(UserResponse {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.contains("password")));
        assert_eq!(value["role"], "user");
    }
}
