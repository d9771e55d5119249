pub mod argon2;
pub mod errors;
pub mod hashed;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use hashed::HashedPassword;
