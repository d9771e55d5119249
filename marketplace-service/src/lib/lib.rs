pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::upload;
pub use domain::user;
pub use domain::vendor;
pub use outbound::repositories;
