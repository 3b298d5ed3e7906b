//! Use cases shared by every entity that hangs off a parent record
//! (apiary, hive, colony, queen, inspection, action, observation, session).
//!
//! Check order is fixed: id shape, then field rules, then existence lookups,
//! then the write. A failure stops the pipeline; no write happens before the
//! last step, so nothing needs undoing. The parent can still be deleted
//! between the existence lookup and the write.

use apis_domain::id::is_valid_id;
use tracing::info;

use crate::domain::entity::EntityFields;
use crate::domain::repository::{EntityRepository, FindById};
use crate::error::ApiServiceError;

fn ensure_valid_id(id: i32, entity: &'static str) -> Result<(), ApiServiceError> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(ApiServiceError::InvalidId(entity))
    }
}

async fn ensure_exists<P: FindById>(
    repo: &P,
    id: i32,
    entity: &'static str,
) -> Result<(), ApiServiceError> {
    match repo.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(ApiServiceError::InvalidId(entity)),
    }
}

// ── CreateEntity ─────────────────────────────────────────────────────────────

pub struct CreateEntityUseCase<R: EntityRepository, P: FindById> {
    pub repo: R,
    pub parents: P,
}

impl<R: EntityRepository, P: FindById> CreateEntityUseCase<R, P> {
    pub async fn execute(&self, fields: R::Fields) -> Result<Option<R::Record>, ApiServiceError> {
        let parent_id = fields.parent_id();
        ensure_valid_id(parent_id, R::Fields::PARENT)?;
        let fields = fields.normalize()?;
        ensure_exists(&self.parents, parent_id, R::Fields::PARENT).await?;

        let created = self.repo.create(&fields).await?;
        if created.is_some() {
            info!(entity = R::Fields::ENTITY, parent_id, "entity created");
        }
        Ok(created)
    }
}

// ── GetEntity ────────────────────────────────────────────────────────────────

pub struct GetEntityUseCase<R: EntityRepository> {
    pub repo: R,
}

impl<R: EntityRepository> GetEntityUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Option<R::Record>, ApiServiceError> {
        ensure_valid_id(id, R::Fields::ENTITY)?;
        self.repo.find_by_id(id).await
    }
}

// ── ListEntitiesByParent ─────────────────────────────────────────────────────

pub struct ListEntitiesByParentUseCase<R: EntityRepository> {
    pub repo: R,
}

impl<R: EntityRepository> ListEntitiesByParentUseCase<R> {
    pub async fn execute(&self, parent_id: i32) -> Result<Option<Vec<R::Record>>, ApiServiceError> {
        ensure_valid_id(parent_id, R::Fields::PARENT)?;
        self.repo.find_by_parent_id(parent_id).await
    }
}

// ── ListEntities ─────────────────────────────────────────────────────────────

pub struct ListEntitiesUseCase<R: EntityRepository> {
    pub repo: R,
}

impl<R: EntityRepository> ListEntitiesUseCase<R> {
    pub async fn execute(&self) -> Result<Option<Vec<R::Record>>, ApiServiceError> {
        self.repo.read_all().await
    }
}

// ── UpdateEntity ─────────────────────────────────────────────────────────────

pub struct UpdateEntityUseCase<R: EntityRepository, P: FindById> {
    pub repo: R,
    pub parents: P,
}

impl<R: EntityRepository, P: FindById> UpdateEntityUseCase<R, P> {
    pub async fn execute(
        &self,
        id: i32,
        fields: R::Fields,
    ) -> Result<Option<R::Record>, ApiServiceError> {
        let parent_id = fields.parent_id();
        ensure_valid_id(id, R::Fields::ENTITY)?;
        ensure_valid_id(parent_id, R::Fields::PARENT)?;
        let fields = fields.normalize()?;
        ensure_exists(&self.repo, id, R::Fields::ENTITY).await?;
        ensure_exists(&self.parents, parent_id, R::Fields::PARENT).await?;

        let updated = self.repo.update(id, &fields).await?;
        if updated.is_some() {
            info!(entity = R::Fields::ENTITY, id, parent_id, "entity updated");
        }
        Ok(updated)
    }
}

// ── DeleteEntity ─────────────────────────────────────────────────────────────

/// Deletes without an existence pre-check; the repository's boolean is the answer.
pub struct DeleteEntityUseCase<R: EntityRepository> {
    pub repo: R,
}

impl<R: EntityRepository> DeleteEntityUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<bool, ApiServiceError> {
        ensure_valid_id(id, R::Fields::ENTITY)?;
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(entity = R::Fields::ENTITY, id, "entity deleted");
        }
        Ok(deleted)
    }
}
