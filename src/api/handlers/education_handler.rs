//! Education handlers.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Extension, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Education, EducationChanges, NewEducation};
use crate::errors::AppResult;
use crate::types::{NoContent, Paginated, PaginationMeta, PaginationParams};

/// Create education request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEducationRequest {
    #[validate(length(min = 1, max = 255, message = "institution must be 1 to 255 characters"))]
    #[schema(example = "University of Tartu")]
    pub institution: String,
    #[validate(length(min = 1, max = 255, message = "degree must be 1 to 255 characters"))]
    #[schema(example = "BSc")]
    pub degree: String,
    #[validate(length(max = 255, message = "field_of_study must be at most 255 characters"))]
    #[schema(example = "Computer Science")]
    pub field_of_study: Option<String>,
    #[schema(example = "2015-09-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2018-06-15")]
    pub end_date: Option<NaiveDate>,
    #[validate(length(max = 4000, message = "description must be at most 4000 characters"))]
    pub description: Option<String>,
}

impl From<CreateEducationRequest> for NewEducation {
    fn from(req: CreateEducationRequest) -> Self {
        Self {
            institution: req.institution,
            degree: req.degree,
            field_of_study: req.field_of_study,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
        }
    }
}

/// Update education request (all fields optional).
///
/// An absent field is left unchanged. `null` clears `field_of_study`,
/// `end_date` and `description`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEducationRequest {
    #[validate(length(min = 1, max = 255, message = "institution must be 1 to 255 characters"))]
    pub institution: Option<String>,
    #[validate(length(min = 1, max = 255, message = "degree must be 1 to 255 characters"))]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255, message = "field_of_study must be at most 255 characters"))]
    pub field_of_study: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 4000, message = "description must be at most 4000 characters"))]
    pub description: Option<Option<String>>,
}

/// Marks a field as present, so an explicit `null` becomes `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateEducationRequest> for EducationChanges {
    fn from(req: UpdateEducationRequest) -> Self {
        Self {
            institution: req.institution,
            degree: req.degree,
            field_of_study: req.field_of_study,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
        }
    }
}

/// One page of education entries
#[derive(Debug, Serialize, ToSchema)]
pub struct EducationPage {
    pub data: Vec<Education>,
    pub meta: PaginationMeta,
}

impl From<Paginated<Education>> for EducationPage {
    fn from(page: Paginated<Education>) -> Self {
        Self {
            data: page.data,
            meta: page.meta,
        }
    }
}

/// Public read routes
pub fn education_read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_educations))
        .route("/:id", get(get_education))
}

/// Write routes, expected to sit behind `auth_middleware`
pub fn education_write_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_education))
        .route("/:id", patch(update_education).delete(delete_education))
}

/// List education entries
#[utoipa::path(
    get,
    path = "/education",
    tag = "Education",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of education entries", body = EducationPage)
    )
)]
pub async fn list_educations(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<Json<EducationPage>> {
    let Query(params) = params?;
    let page = state.education_service.list(params).await?;
    Ok(Json(page.into()))
}

/// Get a single education entry
#[utoipa::path(
    get,
    path = "/education/{id}",
    tag = "Education",
    params(("id" = Uuid, Path, description = "Education ID")),
    responses(
        (status = 200, description = "Education entry", body = Education),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_education(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Education>> {
    let Path(id) = id?;
    let education = state.education_service.get(id).await?;
    Ok(Json(education))
}

/// Create an education entry
#[utoipa::path(
    post,
    path = "/education",
    tag = "Education",
    request_body = CreateEducationRequest,
    responses(
        (status = 201, description = "Education created", body = Education),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_education(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateEducationRequest>,
) -> AppResult<(StatusCode, Json<Education>)> {
    tracing::debug!(user = %user.email, "Creating education entry");
    let education = state.education_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(education)))
}

/// Update an education entry
#[utoipa::path(
    patch,
    path = "/education/{id}",
    tag = "Education",
    params(("id" = Uuid, Path, description = "Education ID")),
    request_body = UpdateEducationRequest,
    responses(
        (status = 200, description = "Education updated", body = Education),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_education(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    id: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<UpdateEducationRequest>,
) -> AppResult<Json<Education>> {
    let Path(id) = id?;
    tracing::debug!(user = %user.email, education_id = %id, "Updating education entry");
    let education = state.education_service.update(id, payload.into()).await?;
    Ok(Json(education))
}

/// Delete an education entry
#[utoipa::path(
    delete,
    path = "/education/{id}",
    tag = "Education",
    params(("id" = Uuid, Path, description = "Education ID")),
    responses(
        (status = 204, description = "Education deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_education(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<NoContent> {
    let Path(id) = id?;
    tracing::debug!(user = %user.email, education_id = %id, "Deleting education entry");
    state.education_service.delete(id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(body: serde_json::Value) -> UpdateEducationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_update_null_clears_and_absent_keeps() {
        let changes: EducationChanges = update(json!({ "end_date": null })).into();
        assert_eq!(changes.end_date, Some(None));
        assert_eq!(changes.description, None);
        assert_eq!(changes.field_of_study, None);
    }

    #[test]
    fn test_update_value_is_set() {
        let changes: EducationChanges =
            update(json!({ "end_date": "2020-06-30", "description": "Thesis" })).into();
        assert_eq!(changes.end_date, Some(NaiveDate::from_ymd_opt(2020, 6, 30)));
        assert_eq!(changes.description, Some(Some("Thesis".to_string())));
    }

    #[test]
    fn test_update_length_rules_apply_to_present_values() {
        let too_long = update(json!({ "description": "x".repeat(4001) }));
        assert!(too_long.validate().is_err());

        let cleared = update(json!({ "description": null, "field_of_study": null }));
        assert!(cleared.validate().is_ok());
    }
}
