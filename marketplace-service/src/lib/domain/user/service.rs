use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::HashedPassword;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::upload::models::UploadCategory;
use crate::upload::ports::FileStore;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Signup and login run the password work on the blocking pool, since
/// Argon2 is deliberately slow.
pub struct UserService<UR, FS>
where
    UR: UserRepository,
    FS: FileStore,
{
    repository: Arc<UR>,
    file_store: Arc<FS>,
    authenticator: Arc<Authenticator>,
}

impl<UR, FS> UserService<UR, FS>
where
    UR: UserRepository,
    FS: FileStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `file_store` - Storage for profile images
    /// * `authenticator` - Password hashing and token issuance
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(
        repository: Arc<UR>,
        file_store: Arc<FS>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            repository,
            file_store,
            authenticator,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<HashedPassword, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    async fn create_user(
        &self,
        command: SignupCommand,
        img: Option<String>,
    ) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: command.name,
            phone: command.phone,
            email: command.email,
            img,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    /// Remove an image stored for a write that did not go through.
    async fn discard_upload(&self, reference: Option<String>) {
        let Some(reference) = reference else {
            return;
        };

        if let Err(e) = self.file_store.delete(&reference).await {
            tracing::warn!(reference = %reference, error = %e, "Failed to remove orphaned upload");
        }
    }
}

#[async_trait]
impl<UR, FS> UserServicePort for UserService<UR, FS>
where
    UR: UserRepository,
    FS: FileStore,
{
    async fn sign_up(&self, mut command: SignupCommand) -> Result<User, UserError> {
        let img = match command.img.take() {
            Some(upload) => Some(self.file_store.save(upload, UploadCategory::Users).await?),
            None => None,
        };

        match self.create_user(command, img.clone()).await {
            Ok(created_user) => {
                tracing::info!(user_id = %created_user.id, "User signed up");
                Ok(created_user)
            }
            Err(e) => {
                self.discard_upload(img).await;
                Err(e)
            }
        }
    }

    async fn log_in(&self, command: LoginCommand) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            tokio::task::spawn_blocking(move || {
                authenticator.reject_unknown_account(password.expose())
            })
            .await
            .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

            tracing::info!("Login rejected: no user with this email");
            return Err(UserError::InvalidCredentials);
        };

        let subject = user.id.to_string();
        let password_hash = user.password_hash;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &password_hash, &subject)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

        match result {
            Ok(result) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(result.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!(user_id = %user.id, "Login rejected: wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Token(e.to_string())),
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        if let Some(new_phone) = command.phone {
            user.phone = new_phone;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        let stored_img = match command.img {
            Some(upload) => Some(self.file_store.save(upload, UploadCategory::Users).await?),
            None => None,
        };
        if stored_img.is_some() {
            user.img = stored_img.clone();
        }

        user.updated_at = Utc::now();

        let result = self.repository.update(user).await;
        if result.is_err() {
            self.discard_upload(stored_img).await;
        }

        result
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
