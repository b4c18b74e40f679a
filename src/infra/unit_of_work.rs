//! Unit of Work - the persistence helper shared by services.
//!
//! Owns the database connection and hands out repositories built on it.
//! One instance is created at startup and shared through `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{EducationRepository, EducationStore, UserRepository, UserStore};

/// Repository access for services.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get education repository
    fn educations(&self) -> Arc<dyn EducationRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    education_repo: Arc<EducationStore>,
}

impl Persistence {
    /// Create repositories over a shared connection
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let education_repo = Arc::new(EducationStore::new(db));
        Self {
            user_repo,
            education_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn educations(&self) -> Arc<dyn EducationRepository> {
        self.education_repo.clone()
    }
}
