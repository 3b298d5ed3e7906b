use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// APIS service error variants.
///
/// Value-class failures (`InvalidId`, `Required`, the credential rules) are
/// distinct from `InvalidType`, which means the client sent the wrong kind
/// of value. Not finding a record is not an error inside use cases; handlers
/// raise `NotFound` when a lookup comes back empty.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    /// Id not positive, or no parent/record with that id. The argument is the
    /// entity name, e.g. `"apiary"` renders `Invalid apiary_id`.
    #[error("Invalid {0}_id")]
    InvalidId(&'static str),
    #[error("{0}")]
    Required(&'static str),
    #[error("{0}")]
    InvalidType(String),
    #[error("Password invalid")]
    PasswordInvalid,
    #[error("Username invalid")]
    UsernameInvalid,
    #[error("Username taken")]
    UsernameTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    NotPersisted(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "INVALID_ID",
            Self::Required(_) => "REQUIRED_FIELD",
            Self::InvalidType(_) => "INVALID_TYPE",
            Self::PasswordInvalid => "PASSWORD_INVALID",
            Self::UsernameInvalid => "USERNAME_INVALID",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NotPersisted(_) => "NOT_PERSISTED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for ApiServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidType(rejection.body_text())
    }
}

impl From<PathRejection> for ApiServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidType(rejection.body_text())
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidId(_)
            | Self::Required(_)
            | Self::PasswordInvalid
            | Self::UsernameInvalid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidType(_) | Self::NotPersisted(_) => StatusCode::BAD_REQUEST,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::UserNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records status for every request; only 500s carry detail worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
