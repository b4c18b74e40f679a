//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `UnitOfWork` abstraction for repository access
//! and are exposed to the API layer as trait objects.

mod auth_service;
pub mod container;
mod education_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use education_service::{EducationManager, EducationService};
