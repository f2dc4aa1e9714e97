use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
    role: Option<String>,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        let name = UserName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        let role = self
            .role
            .as_deref()
            .map(Role::from_str)
            .transpose()?
            .unwrap_or_default();

        Ok(CreateUserCommand {
            name,
            email,
            password: self.password,
            role,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

pub async fn create_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let command = body.try_into_command()?;

    let user = state.user_service.create_user(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(&user),
        }),
    ))
}
