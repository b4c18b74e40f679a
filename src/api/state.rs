//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{AuthService, EducationService, ServiceContainer, Services};

/// Services and infrastructure handed to controllers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Education service
    pub education_service: Arc<dyn EducationService>,
    /// Database handle for health checks, absent in tests
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire all services over the given database.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::from_services(&services, Some(database))
    }

    /// Take services from an existing container.
    pub fn from_services(services: &impl ServiceContainer, database: Option<Arc<Database>>) -> Self {
        Self::new(services.auth(), services.educations(), database)
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        education_service: Arc<dyn EducationService>,
        database: Option<Arc<Database>>,
    ) -> Self {
        Self {
            auth_service,
            education_service,
            database,
        }
    }
}
