use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::UserResponse;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponse {
    pub message: String,
    pub users: Vec<UserResponse>,
    pub count: usize,
}

// Listing is open to any authenticated caller; whether it should be
// admin-only is a product decision, not enforced here.
pub async fn list_users<UR: UserRepository>(
    State(state): State<AppState<UR>>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    let users = state.user_service.list_users().await?;

    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

    Ok(Json(ListUsersResponse {
        message: "Successfully retrieved all users".to_string(),
        count: users.len(),
        users,
    }))
}
