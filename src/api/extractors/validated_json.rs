//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, FieldViolation};

/// JSON body that has passed its `validator` rules.
///
/// Malformed JSON is a `BadRequest`; rule violations become
/// `InvalidInput` with one entry per broken rule.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateEducationRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::InvalidInput(collect_violations(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Flatten `validator` errors into field/message pairs, sorted by field.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 3))]
        name: String,
        #[validate(range(min = 1, message = "age must be positive"))]
        age: i32,
    }

    #[test]
    fn test_collects_every_field() {
        let sample = Sample {
            name: "ab".to_string(),
            age: 0,
        };
        let violations = collect_violations(&sample.validate().unwrap_err());

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("age", "age must be positive"),
                FieldViolation::new("name", "name is invalid"),
            ]
        );
    }
}
