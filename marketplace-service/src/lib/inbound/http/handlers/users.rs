use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::image_url;

pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

/// User as returned to clients. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub img: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponseData {
    pub fn new(user: &User, public_url: &str) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.as_str().to_string(),
            img: image_url(public_url, user.img.as_deref()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
