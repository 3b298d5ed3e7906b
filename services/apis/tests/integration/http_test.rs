use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};

use apis::router::build_router;
use apis::state::AppState;
use apis_schema::{apiaries, hives, users};

fn server(db: DatabaseConnection) -> TestServer {
    TestServer::new(build_router(AppState { db: Arc::new(db) })).unwrap()
}

/// A connection with no prepared results: any query it receives fails.
fn untouched_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn assert_kind(body: &Value, kind: &str) {
    assert_eq!(body["kind"], kind, "unexpected body: {body}");
}

#[tokio::test]
async fn should_answer_healthz() {
    let response = server(untouched_db()).get("/healthz").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let response = server(DatabaseConnection::Disconnected).get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_blank_hive_name_as_value_error() {
    let response = server(untouched_db())
        .post("/hives")
        .json(&json!({ "name": "   ", "apiary_id": 1 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_kind(&body, "REQUIRED_FIELD");
    assert_eq!(body["message"], "Hive name is required");
}

#[tokio::test]
async fn should_reject_negative_parent_id_as_value_error() {
    let response = server(untouched_db())
        .post("/colonies")
        .json(&json!({ "hive_id": -1 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_kind(&body, "INVALID_ID");
    assert_eq!(body["message"], "Invalid hive_id");
}

#[tokio::test]
async fn should_reject_wrong_json_kind_as_type_error() {
    let response = server(untouched_db())
        .post("/hives")
        .json(&json!({ "name": 5, "apiary_id": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_kind(&response.json(), "INVALID_TYPE");
}

#[tokio::test]
async fn should_reject_non_integer_path_id_as_type_error() {
    let response = server(untouched_db()).get("/hives/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_kind(&response.json(), "INVALID_TYPE");
}

#[tokio::test]
async fn should_reject_timestamp_without_offset() {
    let response = server(untouched_db())
        .post("/inspections")
        .json(&json!({ "inspection_timestamp": "2024-05-01T10:00:00", "colony_id": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_kind(&response.json(), "INVALID_TYPE");
}

#[tokio::test]
async fn should_reject_short_password() {
    let response = server(untouched_db())
        .post("/users")
        .json(&json!({ "username": "jake", "password": "short" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_kind(&body, "PASSWORD_INVALID");
    assert_eq!(body["message"], "Password invalid");
}

#[tokio::test]
async fn should_create_hive_under_existing_apiary() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![apiaries::Model {
            apiary_id: 1,
            name: "Flowery Field".to_owned(),
            location: "Kent".to_owned(),
            user_id: 1,
        }]])
        .append_query_results([vec![hives::Model {
            hive_id: 1,
            name: "Hive 1".to_owned(),
            apiary_id: 1,
        }]])
        .into_connection();

    let response = server(db)
        .post("/hives")
        .json(&json!({ "name": " Hive 1 ", "apiary_id": 1 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "hive_id": 1, "name": "Hive 1", "apiary_id": 1 }));
}

#[tokio::test]
async fn should_reject_hive_under_missing_apiary() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<apiaries::Model>::new()])
        .into_connection();

    let response = server(db)
        .post("/hives")
        .json(&json!({ "name": "Hive 1", "apiary_id": 999 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid apiary_id");
}

#[tokio::test]
async fn should_not_expose_password_hash() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![users::Model {
            user_id: 1,
            username: "jake".to_owned(),
            password: "$argon2id$v=19$stub".to_owned(),
        }]])
        .into_connection();

    let response = server(db).get("/users/1").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "user_id": 1, "username": "jake" }));
}

#[tokio::test]
async fn should_return_not_found_when_nothing_was_deleted() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let response = server(db).delete("/hives/5").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Hive not found");
}

#[tokio::test]
async fn should_return_no_content_after_delete() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let response = server(db).delete("/apiaries/1").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_return_not_found_for_empty_parent_listing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<hives::Model>::new()])
        .into_connection();

    let response = server(db).get("/apiaries/1/hives").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "No hives found for this apiary");
}

#[tokio::test]
async fn should_surface_database_failure_as_internal() {
    let response = server(untouched_db()).get("/apiaries").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_kind(&body, "INTERNAL");
    assert_eq!(body["message"], "internal error");
}

#[tokio::test]
async fn should_not_route_session_updates() {
    let response = server(untouched_db())
        .put("/sessions/1")
        .json(&json!({ "user_id": 1 }))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
