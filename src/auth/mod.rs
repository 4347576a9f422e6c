//! Password login and bearer-token authentication.
//!
//! Users register with an email and an Argon2-hashed password. Access and
//! refresh tokens are HS256 JWTs signed with separate secrets and carry the
//! user id as `sub`. The core trusts the `UserId` produced here.

pub mod error;
pub mod password;
pub mod tokens;

pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password};
pub use tokens::{ACCESS_TOKEN_TTL, Claims, REFRESH_TOKEN_TTL, TokenKeys, TokenPair};

use crate::store::{NewUser, RecordId, Store, StoreError, UserId, UserRecord};
use crate::validation;
use std::sync::Arc;

/// Registers users, checks their credentials, and issues and verifies tokens.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    access: Arc<TokenKeys>,
    refresh: Arc<TokenKeys>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, access_secret: &str, refresh_secret: &str) -> Self {
        Self {
            store,
            access: Arc::new(TokenKeys::from_secret(access_secret, ACCESS_TOKEN_TTL)),
            refresh: Arc::new(TokenKeys::from_secret(refresh_secret, REFRESH_TOKEN_TTL)),
        }
    }

    /// Register a user with an email and a password of at least eight
    /// characters. Fails with `EmailTaken` when the email is registered.
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<UserRecord> {
        let email = validation::email(email)?;
        let password = validation::password(password)?;

        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }
        let password_hash = hash_password(password)?;

        // A concurrent registration can still win the unique index.
        let user = self
            .store
            .insert_user(NewUser { email, password_hash })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey { .. } => AuthError::EmailTaken,
            })?;
        log::info!("user {} registered", user.id);
        Ok(user)
    }

    /// Check credentials and issue a token pair. Unknown email and wrong
    /// password both fail with `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<TokenPair> {
        let email = validation::email(email)?;
        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue_tokens(&user.id)
    }

    /// Resolve an `Authorization` header value to the caller's id.
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthResult<UserId> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingCredentials)?;
        self.verify_access(token)
    }

    pub fn verify_access(&self, token: &str) -> AuthResult<UserId> {
        subject(self.access.verify(token)?)
    }

    /// Exchange a refresh token for a new pair, provided the user still exists.
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let user_id = subject(self.refresh.verify(refresh_token)?)?;
        if self.store.find_user(&user_id).await?.is_none() {
            return Err(AuthError::UserNotFound);
        }
        self.issue_tokens(&user_id)
    }

    fn issue_tokens(&self, user_id: &UserId) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.access.sign(user_id)?,
            refresh_token: self.refresh.sign(user_id)?,
        })
    }
}

fn subject(claims: Claims) -> AuthResult<UserId> {
    RecordId::parse(&claims.sub).ok_or(AuthError::InvalidToken)
}
