//! Education API - login validation and an education resource over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: Command-line interface and its implementations
//! - **config**: Environment configuration and constants
//! - **domain**: Login rules, education entries, accounts
//! - **services**: Use cases, plus the container that wires them
//! - **infra**: Database, migrations, repositories, unit of work
//! - **api**: Handlers (controllers), middleware, routes, OpenAPI
//! - **types**: Pagination and response helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create an account, then start the server
//! cargo run -- users create --email admin@example.com --password password123
//! cargo run -- serve
//!
//! # Inspect migrations
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Education, LoginDto};
pub use errors::{AppError, AppResult};
