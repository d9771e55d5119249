use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::form::FormData;
use crate::inbound::http::handlers::users::UserResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Partial update: empty or missing fields keep their current value.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: FormData,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = update_command(form)?;

    state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::OK, UserResponseData::new(user, &state.public_url))
        })
}

fn update_command(mut form: FormData) -> Result<UpdateUserCommand, UserError> {
    let email = form.take_non_empty("email").map(EmailAddress::new).transpose()?;

    Ok(UpdateUserCommand {
        name: form.take_non_empty("name"),
        phone: form.take_non_empty("phone"),
        email,
        img: form.take_image("img")?,
    })
}
