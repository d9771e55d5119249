use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::vendors::VendorResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::vendor::ports::VendorServicePort;

pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VendorResponseData>>, ApiError> {
    let vendors = state.vendor_service.list_vendors().await?;

    let data = vendors
        .iter()
        .map(|vendor| VendorResponseData::new(vendor, &state.public_url))
        .collect();

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
