//! Repository layer - Data access abstraction
//!
//! Repositories translate between SeaORM entities and domain types.

pub(crate) mod entities;
mod education_repository;
mod user_repository;

pub use education_repository::{EducationRepository, EducationStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use education_repository::MockEducationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
