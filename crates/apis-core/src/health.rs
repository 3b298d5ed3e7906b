use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness only, never touches the database.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
