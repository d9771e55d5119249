use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::inbound::http::handlers::image_url;
use crate::vendor::models::Vendor;

pub mod create_vendor;
pub mod delete_vendor;
pub mod get_vendor;
pub mod list_vendors;
pub mod update_vendor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorResponseData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VendorResponseData {
    pub fn new(vendor: &Vendor, public_url: &str) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: vendor.name.as_str().to_string(),
            description: vendor.description.clone(),
            img: image_url(public_url, vendor.img.as_deref()),
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}
