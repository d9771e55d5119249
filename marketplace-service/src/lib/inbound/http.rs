pub mod form;
pub mod handlers;
pub mod middleware;
pub mod router;
