use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::auth::domain::{mint_token, Session};
use crate::modules::auth::ports::{SessionStore, SessionStoreError};
use crate::modules::store::ports::{StoreError, UserDirectory, UserFilter};
use crate::shared::validation::{Form, Rule, ValidationErrors, Value};

// ========================= Login Request =========================

/// Credentials as typed into the login form.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Builds a validated request; field errors come back keyed for
    /// inline display.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        Form::new()
            .field(
                "email",
                "Email",
                Value::Text(email),
                vec![Rule::Required, Rule::Email],
            )
            .field(
                "password",
                "Password",
                Value::Text(password),
                vec![Rule::Required],
            )
            .validate()?;

        Ok(Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Login Error ===========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

// ====================== Login Use Case ===========================

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    directory: D,
    sessions: S,
}

impl<D, S> LoginUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    pub fn new(directory: D, sessions: S) -> Self {
        Self {
            directory,
            sessions,
        }
    }
}

#[async_trait]
impl<D, S> ILoginUseCase for LoginUseCase<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError> {
        let matches = self
            .directory
            .find_users(UserFilter::credentials(request.email(), request.password()))
            .await?;

        // Exactly one matching record authenticates. Zero is a plain
        // mismatch; more than one means the store holds ambiguous
        // credential rows and no identity can be asserted from them.
        let user = match matches.as_slice() {
            [user] => user.clone(),
            [] => return Err(LoginError::InvalidCredentials),
            _ => {
                warn!(email = request.email(), "ambiguous credential match");
                return Err(LoginError::InvalidCredentials);
            }
        };

        let token = mint_token(&user.id);
        self.sessions.save(&token, &user)?;

        info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(Session { token, user })
    }
}
