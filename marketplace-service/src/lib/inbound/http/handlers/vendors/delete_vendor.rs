use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::vendor::errors::VendorError;
use crate::vendor::models::VendorId;
use crate::vendor::ports::VendorServicePort;

pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let vendor_id = VendorId::from_string(&id).map_err(VendorError::from)?;

    state
        .vendor_service
        .delete_vendor(&vendor_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
