//! Login request shape and its validation rules.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{INVALID_EMAIL_MESSAGE, PASSWORD_TOO_SHORT_MESSAGE};
use crate::errors::{AppError, FieldViolation};

/// Credentials submitted to the login endpoint.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    /// Account email address
    #[validate(
        email(message = "email must be an email"),
        custom(function = "validate_email_domain")
    )]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters leter"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
}

// Keep the password out of logs
impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The rules a login payload can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginViolationKind {
    InvalidEmailFormat,
    PasswordTooShort,
}

impl LoginViolationKind {
    /// Declaration order of the checked fields.
    const ALL: [LoginViolationKind; 2] = [
        LoginViolationKind::InvalidEmailFormat,
        LoginViolationKind::PasswordTooShort,
    ];

    /// Field the rule is attached to
    pub fn field(&self) -> &'static str {
        match self {
            LoginViolationKind::InvalidEmailFormat => "email",
            LoginViolationKind::PasswordTooShort => "password",
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            LoginViolationKind::InvalidEmailFormat => INVALID_EMAIL_MESSAGE,
            LoginViolationKind::PasswordTooShort => PASSWORD_TOO_SHORT_MESSAGE,
        }
    }
}

/// A broken login rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginViolation {
    pub kind: LoginViolationKind,
}

impl LoginViolation {
    pub fn field(&self) -> &'static str {
        self.kind.field()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl From<LoginViolation> for FieldViolation {
    fn from(violation: LoginViolation) -> Self {
        FieldViolation::new(violation.field(), violation.message())
    }
}

impl LoginDto {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate an untyped payload (e.g. a parsed request body).
    ///
    /// Missing or non-string fields are treated as empty strings, so they
    /// break the rule attached to that field. Every broken rule is reported,
    /// `email` first.
    pub fn from_payload(payload: &Value) -> Result<Self, Vec<LoginViolation>> {
        let text = |key: &str| {
            payload
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let dto = Self {
            email: text("email"),
            password: text("password"),
        };

        let violations = dto.violations();
        if violations.is_empty() {
            Ok(dto)
        } else {
            Err(violations)
        }
    }

    /// Run the declared rules, returning broken ones in field order.
    pub fn violations(&self) -> Vec<LoginViolation> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let fields = errors.field_errors();
        LoginViolationKind::ALL
            .into_iter()
            .filter(|kind| fields.contains_key(kind.field()))
            .map(|kind| LoginViolation { kind })
            .collect()
    }

    /// Same as `violations`, folded into an `AppError` when non-empty.
    pub fn check(&self) -> Result<(), AppError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.into())
        }
    }
}

/// The domain must be a dotted host name whose last label is alphabetic and
/// at least two characters long (or an `xn--` label). IP literals fail.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    let labels: Vec<&str> = domain.split('.').collect();
    let tld = labels.last().copied().unwrap_or_default();

    let tld_ok = tld.chars().count() >= 2
        && (tld.chars().all(char::is_alphabetic)
            || tld.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn--")));

    if labels.len() >= 2 && labels.iter().all(|label| !label.is_empty()) && tld_ok {
        Ok(())
    } else {
        let mut error = ValidationError::new("email_domain");
        error.message = Some(Cow::Borrowed(INVALID_EMAIL_MESSAGE));
        Err(error)
    }
}

impl From<Vec<LoginViolation>> for AppError {
    fn from(violations: Vec<LoginViolation>) -> Self {
        AppError::InvalidInput(violations.into_iter().map(FieldViolation::from).collect())
    }
}
