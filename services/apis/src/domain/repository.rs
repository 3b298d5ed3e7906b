#![allow(async_fn_in_trait)]

use crate::domain::entity::EntityFields;
use crate::domain::types::User;
use crate::error::ApiServiceError;

/// Lookup by primary key. Every repository implements this, which is all a
/// child use case needs from its parent's repository.
pub trait FindById: Send + Sync {
    type Record: Send;

    async fn find_by_id(&self, id: i32) -> Result<Option<Self::Record>, ApiServiceError>;
}

/// Repository for an entity that belongs to a parent record.
///
/// `None` means no matching row. Database failures come back as `Err`.
pub trait EntityRepository: FindById {
    type Fields: EntityFields;

    async fn create(&self, fields: &Self::Fields)
    -> Result<Option<Self::Record>, ApiServiceError>;

    /// Records under `parent_id`. An empty result is `None`.
    async fn find_by_parent_id(
        &self,
        parent_id: i32,
    ) -> Result<Option<Vec<Self::Record>>, ApiServiceError>;

    /// All records. An empty table is `None`.
    async fn read_all(&self) -> Result<Option<Vec<Self::Record>>, ApiServiceError>;

    /// Replace the mutable fields of record `id`. `None` if no row was updated.
    async fn update(
        &self,
        id: i32,
        fields: &Self::Fields,
    ) -> Result<Option<Self::Record>, ApiServiceError>;

    /// Delete record `id`. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
}

/// Repository for user accounts. Usernames arrive already normalized.
pub trait UserRepository: FindById<Record = User> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiServiceError>;

    /// Insert a user. A concurrent insert of the same username surfaces as
    /// `UsernameTaken`.
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError>;

    async fn read_all(&self) -> Result<Option<Vec<User>>, ApiServiceError>;

    async fn update(
        &self,
        id: i32,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, ApiServiceError>;

    /// Delete a user and, through cascading keys, everything they own.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiServiceError>;
}
