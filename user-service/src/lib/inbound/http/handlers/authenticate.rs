use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponse {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

pub async fn authenticate<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let email = EmailAddress::new(body.email).map_err(UserError::from)?;

    // Unknown email and wrong password are distinct domain errors, but the
    // response must not reveal which one occurred
    let user = state
        .user_service
        .authenticate(email.as_str(), &body.password)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) | UserError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            other => ApiError::from(other),
        })?;

    let claims = auth::Claims::for_identity(
        user.id.0,
        user.role.as_str(),
        state.jwt_expiration_hours,
    );

    let token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(Json(AuthenticateResponse {
        message: "User signed in successfully".to_string(),
        user: UserResponse::from(&user),
        token,
    }))
}
