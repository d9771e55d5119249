#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::SigningKey;
use marketplace_service::domain::user::service::UserService;
use marketplace_service::domain::vendor::service::VendorService;
use marketplace_service::inbound::http::router::create_router;
use marketplace_service::inbound::http::router::AppState;
use marketplace_service::outbound::storage::LocalFileStore;
use marketplace_service::user::errors::UserError;
use marketplace_service::user::models::User;
use marketplace_service::user::models::UserId;
use marketplace_service::user::ports::UserRepository;
use marketplace_service::vendor::errors::VendorError;
use marketplace_service::vendor::models::Vendor;
use marketplace_service::vendor::models::VendorId;
use marketplace_service::vendor::ports::VendorRepository;
use serde_json::Value;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// User repository backed by a map, enforcing unique emails like the database.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn find_by_email_sync(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.find_by_email_sync(email))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(UserError::NotFound(user.id.to_string())),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryVendorRepository {
    vendors: Mutex<HashMap<VendorId, Vendor>>,
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    async fn create(&self, vendor: Vendor) -> Result<Vendor, VendorError> {
        self.vendors
            .lock()
            .unwrap()
            .insert(vendor.id, vendor.clone());
        Ok(vendor)
    }

    async fn find_by_id(&self, id: &VendorId) -> Result<Option<Vendor>, VendorError> {
        Ok(self.vendors.lock().unwrap().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Vendor>, VendorError> {
        Ok(self.vendors.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, vendor: Vendor) -> Result<Vendor, VendorError> {
        match self.vendors.lock().unwrap().get_mut(&vendor.id) {
            Some(existing) => {
                *existing = vendor.clone();
                Ok(vendor)
            }
            None => Err(VendorError::NotFound(vendor.id.to_string())),
        }
    }

    async fn delete(&self, id: &VendorId) -> Result<(), VendorError> {
        self.vendors
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(VendorError::NotFound(id.to_string()))
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub uploads_dir: PathBuf,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let uploads_dir =
            std::env::temp_dir().join(format!("marketplace-test-{}", uuid::Uuid::new_v4()));

        let signing_key = SigningKey::new(JWT_SECRET).expect("Failed to create signing key");
        let authenticator = Arc::new(Authenticator::new(&signing_key));
        let file_store = Arc::new(LocalFileStore::new(&uploads_dir));
        let users = Arc::new(InMemoryUserRepository::default());
        let vendors = Arc::new(InMemoryVendorRepository::default());

        let state = AppState {
            user_service: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&file_store),
                Arc::clone(&authenticator),
            )),
            vendor_service: Arc::new(VendorService::new(vendors, file_store)),
            public_url: address.clone(),
        };

        let router = create_router(state, authenticator, &uploads_dir);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(&signing_key),
            users,
            uploads_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path)).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }

    /// Sign up with a url-encoded form.
    pub async fn signup(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/signup")
            .form(&[
                ("name", "Alice"),
                ("phone", "555-0100"),
                ("email", email),
                ("password", password),
            ])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign up and log in, returning the user id and a bearer token.
    pub async fn signed_in_user(&self, email: &str) -> (String, String) {
        let body: Value = self
            .signup(email, "secret1")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        let id = body["id"].as_str().expect("id missing").to_string();

        let body: Value = self
            .login(email, "secret1")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        let token = body["token"].as_str().expect("token missing").to_string();

        (id, token)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.uploads_dir);
    }
}
