use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let name = self.name.map(UserName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        let role = self.role.as_deref().map(Role::from_str).transpose()?;

        Ok(UpdateUserCommand {
            name,
            email,
            password: self.password,
            role,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

pub async fn update_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    // Identifier and payload validation happen at the HTTP boundary, before
    // the service evaluates any policy
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .update_user(&identity, &user_id, command)
        .await?;

    Ok(Json(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user: UserResponse::from(&user),
    }))
}
