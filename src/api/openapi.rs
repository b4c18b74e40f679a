//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, education_handler};
use crate::domain::{Education, LoginDto};
use crate::services::TokenResponse;
use crate::types::PaginationMeta;

/// OpenAPI documentation for the Education API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Education API",
        version = "0.1.0",
        description = "Login and education resource management",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        education_handler::list_educations,
        education_handler::get_education,
        education_handler::create_education,
        education_handler::update_education,
        education_handler::delete_education,
    ),
    components(
        schemas(
            LoginDto,
            TokenResponse,
            Education,
            PaginationMeta,
            education_handler::CreateEducationRequest,
            education_handler::UpdateEducationRequest,
            education_handler::EducationPage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login"),
        (name = "Education", description = "Education entries")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_education_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/auth/login"));
        assert!(doc.paths.paths.contains_key("/education"));
        assert!(doc.paths.paths.contains_key("/education/{id}"));
    }
}
