//! Password authentication.
//!
//! Passwords are hashed with Argon2id using a random salt. Hashing and verification are
//! CPU-bound and run on the blocking thread pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr};
use validator::Validate;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{normalize_email, CreateUserParams, RegisterParams, User},
    service::admin::code::AdminCodeService,
};

const DUPLICATE_EMAIL: &str = "An account with this email already exists";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created, non-admin user
    /// - `Err(AppError::ValidationErr)` - Name, email or password invalid
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        params.validate()?;

        let repo = UserRepository::new(self.db);
        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let password = params.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(InternalError::from)??;

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(DUPLICATE_EMAIL.to_string())
                }
                _ => e.into(),
            })?;

        tracing::info!(user_id = user.id, "Registered new user");

        Ok(user)
    }

    /// Verifies an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(entity) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let stored_hash = entity.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(InternalError::from)??;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(entity))
    }

    /// Promotes `user` to admin by redeeming the one-time admin code.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with admin rights
    /// - `Err(AuthError::InvalidAdminCode)` - Wrong, used or expired code
    pub async fn claim_admin(
        &self,
        user: &User,
        code: &str,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        if !admin_codes.validate_and_consume(code.trim()).await {
            return Err(AuthError::InvalidAdminCode.into());
        }

        let updated = UserRepository::new(self.db)
            .set_admin(user.id, true)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user.id))?;

        tracing::info!(user_id = updated.id, "Granted admin rights via admin code");

        Ok(updated)
    }
}

/// Hashes a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Whether the password matches
/// - `Err(InternalError::PasswordHash)` - Stored hash is not a valid PHC string
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
