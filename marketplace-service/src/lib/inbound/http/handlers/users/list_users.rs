use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::users::UserResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    let users = state.user_service.list_users().await?;

    let data = users
        .iter()
        .map(|user| UserResponseData::new(user, &state.public_url))
        .collect();

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
