use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::form::FormData;
use crate::inbound::http::handlers::vendors::VendorResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::vendor::errors::VendorError;
use crate::vendor::models::UpdateVendorCommand;
use crate::vendor::models::VendorId;
use crate::vendor::models::VendorName;
use crate::vendor::ports::VendorServicePort;

pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: FormData,
) -> Result<ApiSuccess<VendorResponseData>, ApiError> {
    let vendor_id = VendorId::from_string(&id).map_err(VendorError::from)?;
    let command = update_command(form)?;

    state
        .vendor_service
        .update_vendor(&vendor_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref vendor| {
            ApiSuccess::new(StatusCode::OK, VendorResponseData::new(vendor, &state.public_url))
        })
}

fn update_command(mut form: FormData) -> Result<UpdateVendorCommand, VendorError> {
    let name = form
        .take_non_empty("name")
        .map(|name| VendorName::new(&name))
        .transpose()?;

    Ok(UpdateVendorCommand {
        name,
        description: form.take_non_empty("description"),
        img: form.take_image("img")?,
    })
}
