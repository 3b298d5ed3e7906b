//! Route handlers shared by every child entity. Each entity plugs in through
//! [`Resource`], which names its repositories, request body and response
//! messages.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::entity::EntityFields;
use crate::domain::repository::{EntityRepository, FindById};
use crate::error::ApiServiceError;
use crate::handlers::{IdPath, JsonBody};
use crate::state::AppState;
use crate::usecase::entity::{
    CreateEntityUseCase, DeleteEntityUseCase, GetEntityUseCase, ListEntitiesByParentUseCase,
    ListEntitiesUseCase, UpdateEntityUseCase,
};

pub trait Resource: 'static {
    type Record: Serialize + Send;
    type Fields: EntityFields;
    type Repo: EntityRepository<Record = Self::Record, Fields = Self::Fields>;
    type Parents: FindById;
    /// Body accepted by create and update.
    type Request: DeserializeOwned + Send;

    const NOT_FOUND: &'static str;
    const NONE_FOUND: &'static str;
    const NONE_FOUND_FOR_PARENT: &'static str;
    const CREATE_FAILED: &'static str;
    /// Resources without an update route keep the default.
    const UPDATE_FAILED: &'static str = "Failed to update record";

    fn repo(state: &AppState) -> Self::Repo;
    fn parents(state: &AppState) -> Self::Parents;
    fn fields(request: Self::Request) -> Self::Fields;
}

// ── POST /<entities> ─────────────────────────────────────────────────────────

pub async fn create<T: Resource>(
    State(state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<T::Request>,
) -> Result<(StatusCode, Json<T::Record>), ApiServiceError> {
    let usecase = CreateEntityUseCase {
        repo: T::repo(&state),
        parents: T::parents(&state),
    };
    let created = usecase
        .execute(T::fields(body))
        .await?
        .ok_or(ApiServiceError::NotPersisted(T::CREATE_FAILED))?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ── GET /<entities> ──────────────────────────────────────────────────────────

pub async fn list<T: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<T::Record>>, ApiServiceError> {
    let usecase = ListEntitiesUseCase {
        repo: T::repo(&state),
    };
    let records = usecase
        .execute()
        .await?
        .ok_or(ApiServiceError::NotFound(T::NONE_FOUND))?;
    Ok(Json(records))
}

// ── GET /<entities>/{id} ─────────────────────────────────────────────────────

pub async fn get<T: Resource>(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<T::Record>, ApiServiceError> {
    let usecase = GetEntityUseCase {
        repo: T::repo(&state),
    };
    let record = usecase
        .execute(id)
        .await?
        .ok_or(ApiServiceError::NotFound(T::NOT_FOUND))?;
    Ok(Json(record))
}

// ── GET /<parents>/{parent_id}/<entities> ────────────────────────────────────

pub async fn list_by_parent<T: Resource>(
    State(state): State<AppState>,
    WithRejection(Path(parent_id), _): IdPath,
) -> Result<Json<Vec<T::Record>>, ApiServiceError> {
    let usecase = ListEntitiesByParentUseCase {
        repo: T::repo(&state),
    };
    let records = usecase
        .execute(parent_id)
        .await?
        .ok_or(ApiServiceError::NotFound(T::NONE_FOUND_FOR_PARENT))?;
    Ok(Json(records))
}

// ── PUT /<entities>/{id} ─────────────────────────────────────────────────────

pub async fn update<T: Resource>(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(body), _): JsonBody<T::Request>,
) -> Result<Json<T::Record>, ApiServiceError> {
    let usecase = UpdateEntityUseCase {
        repo: T::repo(&state),
        parents: T::parents(&state),
    };
    let updated = usecase
        .execute(id, T::fields(body))
        .await?
        .ok_or(ApiServiceError::NotPersisted(T::UPDATE_FAILED))?;
    Ok(Json(updated))
}

// ── DELETE /<entities>/{id} ──────────────────────────────────────────────────

pub async fn delete<T: Resource>(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteEntityUseCase {
        repo: T::repo(&state),
    };
    if usecase.execute(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiServiceError::NotFound(T::NOT_FOUND))
    }
}
