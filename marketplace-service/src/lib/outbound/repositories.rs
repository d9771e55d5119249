pub mod user;
pub mod vendor;

pub use user::PostgresUserRepository;
pub use vendor::PostgresVendorRepository;
