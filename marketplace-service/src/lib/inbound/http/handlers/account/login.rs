use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::form::FormData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    mut form: FormData,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An empty password can never match; answer like any other failed login.
    let password = Password::new(form.take_text("password").unwrap_or_default())
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    let command = LoginCommand {
        email: form.take_text("email").unwrap_or_default(),
        password,
    };

    state
        .user_service
        .log_in(command)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
