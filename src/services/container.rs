//! Service container - the composition root.
//!
//! Builds the persistence helper once and passes it into every service
//! constructor. Controllers receive the services through `AppState`.

use std::sync::Arc;

use super::{AuthService, EducationService};
use crate::config::Config;
use crate::infra::Persistence;

/// Centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get education service
    fn educations(&self) -> Arc<dyn EducationService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    education_service: Arc<dyn EducationService>,
}

impl Services {
    /// Wire every service over a single database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, EducationManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let education_service = Arc::new(EducationManager::new(uow));

        tracing::debug!("Services wired");

        Self {
            auth_service,
            education_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn educations(&self) -> Arc<dyn EducationService> {
        self.education_service.clone()
    }
}
