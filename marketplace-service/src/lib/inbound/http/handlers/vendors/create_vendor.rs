use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::form::FormData;
use crate::inbound::http::handlers::vendors::VendorResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::vendor::errors::VendorError;
use crate::vendor::models::CreateVendorCommand;
use crate::vendor::models::VendorName;
use crate::vendor::ports::VendorServicePort;

pub async fn create_vendor(
    State(state): State<AppState>,
    form: FormData,
) -> Result<ApiSuccess<VendorResponseData>, ApiError> {
    let command = create_command(form)?;

    state
        .vendor_service
        .create_vendor(command)
        .await
        .map_err(ApiError::from)
        .map(|ref vendor| {
            ApiSuccess::new(
                StatusCode::CREATED,
                VendorResponseData::new(vendor, &state.public_url),
            )
        })
}

fn create_command(mut form: FormData) -> Result<CreateVendorCommand, VendorError> {
    let name = VendorName::new(&form.take_text("name").unwrap_or_default())?;

    Ok(CreateVendorCommand {
        name,
        description: form.take_text("description").unwrap_or_default(),
        img: form.take_image("img")?,
    })
}
