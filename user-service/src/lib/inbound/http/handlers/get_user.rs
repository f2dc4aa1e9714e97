use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserResponse {
    pub message: String,
    pub user: UserResponse,
}

pub async fn get_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Path(id): Path<String>,
) -> Result<Json<GetUserResponse>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;

    let user = state.user_service.get_user(&user_id).await?;

    Ok(Json(GetUserResponse {
        message: "Successfully retrieved user".to_string(),
        user: UserResponse::from(&user),
    }))
}
