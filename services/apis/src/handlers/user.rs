use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Session, SessionFields, User};
use crate::error::ApiServiceError;
use crate::handlers::{IdPath, JsonBody};
use crate::state::AppState;
use crate::usecase::entity::CreateEntityUseCase;
use crate::usecase::user::{
    AuthenticateUserUseCase, CreateUserUseCase, Credentials, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserUseCase,
};

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl From<CredentialsRequest> for Credentials {
    fn from(body: CredentialsRequest) -> Self {
        Self {
            username: body.username,
            password: body.password,
        }
    }
}

/// Public view of a user; the password hash is never serialized.
#[derive(Serialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiServiceError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(body.into())
        .await?
        .ok_or(ApiServiceError::NotPersisted("Failed to create user"))?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase
        .execute()
        .await?
        .ok_or(ApiServiceError::NotFound("No users found"))?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /users/{user_id} ─────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): IdPath,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(user_id)
        .await?
        .ok_or(ApiServiceError::UserNotFound)?;
    Ok(Json(user.into()))
}

// ── PUT /users/{user_id} ─────────────────────────────────────────────────────

pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): IdPath,
    WithRejection(Json(body), _): JsonBody<CredentialsRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(user_id, body.into())
        .await?
        .ok_or(ApiServiceError::NotPersisted("Failed to update user"))?;
    Ok(Json(user.into()))
}

// ── DELETE /users/{user_id} ──────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): IdPath,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    if usecase.execute(user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiServiceError::UserNotFound)
    }
}

// ── POST /users/login ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub session: Session,
}

/// Verify credentials and open a session for the user.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiServiceError> {
    let auth = AuthenticateUserUseCase {
        repo: state.user_repo(),
    };
    let user = auth
        .execute(body.into())
        .await?
        .ok_or(ApiServiceError::InvalidCredentials)?;

    let open_session = CreateEntityUseCase {
        repo: state.session_repo(),
        parents: state.user_repo(),
    };
    let session = open_session
        .execute(SessionFields::starting_now(user.id))
        .await?
        .ok_or(ApiServiceError::NotPersisted("Failed to create session"))?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            user: user.into(),
            session,
        }),
    ))
}
