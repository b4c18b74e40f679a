//! Authentication service - login, account creation and token checks.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{LoginDto, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token
    async fn login(&self, credentials: LoginDto) -> AppResult<TokenResponse>;

    /// Create a login account
    async fn create_account(&self, credentials: LoginDto) -> AppResult<User>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Hash verified when the account does not exist, so both paths cost the same.
fn dummy_hash() -> &'static str {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    DUMMY_HASH.get_or_init(|| {
        Password::new("timing-equalizer-password")
            .map(Password::into_string)
            .unwrap_or_default()
    })
}

fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, credentials: LoginDto) -> AppResult<TokenResponse> {
        let user = self.uow.users().find_by_email(&credentials.email).await?;

        // Unknown emails still pay for one hash verification.
        let stored_hash = user
            .as_ref()
            .map_or_else(|| dummy_hash().to_string(), |u| u.password_hash.clone());
        let password_valid = Password::from_hash(stored_hash).verify(&credentials.password);

        match user {
            Some(user) if password_valid => {
                tracing::info!(user_id = %user.id, "Login succeeded");
                generate_token(&user, &self.config)
            }
            _ => {
                tracing::debug!("Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn create_account(&self, credentials: LoginDto) -> AppResult<User> {
        credentials.check()?;

        if self
            .uow
            .users()
            .find_by_email(&credentials.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&credentials.password)?.into_string();
        self.uow
            .users()
            .create(User::new(credentials.email, password_hash))
            .await
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{EducationRepository, MockEducationRepository, MockUserRepository, UserRepository};

    struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn educations(&self) -> Arc<dyn EducationRepository> {
            Arc::new(MockEducationRepository::new())
        }
    }

    fn authenticator(repo: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        let config = Config::new("postgres://localhost/test", "test-secret-key-for-testing-only-32chars")
            .unwrap();
        let uow = TestUnitOfWork {
            users: Arc::new(repo),
        };
        Authenticator::new(Arc::new(uow), config)
    }

    fn stored_user(password: &str) -> User {
        User::new(
            "user@example.com".to_string(),
            Password::new(password).unwrap().into_string(),
        )
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let user = stored_user("password123");
        let user_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "user@example.com")
            .returning(move |_| Ok(Some(user.clone())));

        let auth = authenticator(repo);
        let token = auth
            .login(LoginDto::new("user@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 24 * 3600);

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = stored_user("password123");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let result = authenticator(repo)
            .login(LoginDto::new("user@example.com", "wrong-password"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = authenticator(repo)
            .login(LoginDto::new("nobody@example.com", "password123"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_create_account_rejects_duplicate() {
        let user = stored_user("password123");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_create().never();

        let result = authenticator(repo)
            .create_account(LoginDto::new("user@example.com", "password123"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_account_validates_credentials() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let err = authenticator(repo)
            .create_account(LoginDto::new("bad", "123"))
            .await
            .unwrap_err();

        assert_eq!(err.violations().len(), 2);
    }

    #[tokio::test]
    async fn test_create_account_stores_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.email == "new@example.com" && user.password_hash != "password123")
            .returning(Ok);

        let user = authenticator(repo)
            .create_account(LoginDto::new("new@example.com", "password123"))
            .await
            .unwrap();

        assert!(Password::from_hash(user.password_hash).verify("password123"));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let auth = authenticator(MockUserRepository::new());
        assert!(matches!(auth.verify_token("not-a-jwt"), Err(AppError::Jwt(_))));
    }
}
