use apis_domain::credentials::{normalize_username, validate_password, validate_username};
use tracing::info;

use crate::domain::password::{hash_password, spend_verification, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiServiceError;

/// Raw credentials as submitted by the client.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Apply the password rule, then the username rule to the normalized
    /// username. Returns the normalized username.
    fn validated_username(&self) -> Result<String, ApiServiceError> {
        if !validate_password(&self.password) {
            return Err(ApiServiceError::PasswordInvalid);
        }
        let username = normalize_username(&self.username);
        if !validate_username(&username) {
            return Err(ApiServiceError::UsernameInvalid);
        }
        Ok(username)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: Credentials) -> Result<Option<User>, ApiServiceError> {
        let username = input.validated_username()?;
        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(ApiServiceError::UsernameTaken);
        }
        let password_hash = hash_password(&input.password)?;
        let created = self.repo.create(&username, &password_hash).await?;
        if let Some(ref user) = created {
            info!(user_id = user.id, "user created");
        }
        Ok(created)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<Option<User>, ApiServiceError> {
        self.repo.find_by_id(user_id).await
    }
}

// ── FindUserByUsername ───────────────────────────────────────────────────────

/// Exact match; callers pass a normalized username.
pub struct FindUserByUsernameUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> FindUserByUsernameUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<Option<User>, ApiServiceError> {
        self.repo.find_by_username(username).await
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Option<Vec<User>>, ApiServiceError> {
        self.repo.read_all().await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i32,
        input: Credentials,
    ) -> Result<Option<User>, ApiServiceError> {
        let username = input.validated_username()?;
        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(ApiServiceError::UserNotFound);
        }
        if let Some(holder) = self.repo.find_by_username(&username).await? {
            if holder.id != user_id {
                return Err(ApiServiceError::UsernameTaken);
            }
        }
        // Always re-hash, even if the password is unchanged.
        let password_hash = hash_password(&input.password)?;
        let updated = self.repo.update(user_id, &username, &password_hash).await?;
        if updated.is_some() {
            info!(user_id, "user updated");
        }
        Ok(updated)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<bool, ApiServiceError> {
        let deleted = self.repo.delete(user_id).await?;
        if deleted {
            info!(user_id, "user deleted");
        }
        Ok(deleted)
    }
}

// ── AuthenticateUser ─────────────────────────────────────────────────────────

pub struct AuthenticateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> AuthenticateUserUseCase<R> {
    /// `None` for an unknown username or a wrong password; the two are not
    /// distinguished.
    pub async fn execute(&self, input: Credentials) -> Result<Option<User>, ApiServiceError> {
        let username = normalize_username(&input.username);
        match self.repo.find_by_username(&username).await? {
            Some(user) if verify_password(&input.password, &user.password_hash) => Ok(Some(user)),
            Some(_) => Ok(None),
            None => {
                spend_verification(&input.password);
                Ok(None)
            }
        }
    }
}
