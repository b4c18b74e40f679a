//! HTTP request handlers.

pub mod auth_handler;
pub mod education_handler;

pub use auth_handler::auth_routes;
pub use education_handler::{education_read_routes, education_write_routes};
