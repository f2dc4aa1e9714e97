use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
    #[serde(rename = "deletedUser")]
    pub deleted_user: UserResponse,
}

pub async fn delete_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    let deleted = state
        .user_service
        .delete_user(&identity, &user_id)
        .await?;

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
        deleted_user: UserResponse::from(&deleted),
    }))
}
