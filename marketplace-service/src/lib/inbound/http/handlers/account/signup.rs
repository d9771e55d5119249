use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::form::FormData;
use crate::inbound::http::handlers::users::UserResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Register a user from a url-encoded or multipart form.
///
/// The password is checked before anything else, so an empty one never
/// reaches the file store, the hasher or the repository.
pub async fn signup(
    State(state): State<AppState>,
    form: FormData,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let command = signup_command(form)?;

    state
        .user_service
        .sign_up(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(
                StatusCode::CREATED,
                UserResponseData::new(user, &state.public_url),
            )
        })
}

fn signup_command(mut form: FormData) -> Result<SignupCommand, UserError> {
    let password = Password::new(form.take_text("password").unwrap_or_default())?;
    let email = EmailAddress::new(form.take_text("email").unwrap_or_default())?;
    let img = form.take_image("img")?;

    Ok(SignupCommand {
        name: form.take_text("name").unwrap_or_default(),
        phone: form.take_text("phone").unwrap_or_default(),
        email,
        password,
        img,
    })
}
