use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use apis_core::health::healthz;
use apis_core::middleware::request_id_layer;

use crate::handlers::{
    entity,
    health::readyz,
    resources::{Actions, Apiaries, Colonies, Hives, Inspections, Observations, Queens, Sessions},
    user::{create_user, delete_user, get_user, list_users, login, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user).get(list_users))
        .route("/users/login", post(login))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Apiaries
        .route(
            "/apiaries",
            post(entity::create::<Apiaries>).get(entity::list::<Apiaries>),
        )
        .route(
            "/apiaries/{apiary_id}",
            get(entity::get::<Apiaries>)
                .put(entity::update::<Apiaries>)
                .delete(entity::delete::<Apiaries>),
        )
        // Hives
        .route(
            "/hives",
            post(entity::create::<Hives>).get(entity::list::<Hives>),
        )
        .route(
            "/hives/{hive_id}",
            get(entity::get::<Hives>)
                .put(entity::update::<Hives>)
                .delete(entity::delete::<Hives>),
        )
        // Colonies
        .route(
            "/colonies",
            post(entity::create::<Colonies>).get(entity::list::<Colonies>),
        )
        .route(
            "/colonies/{colony_id}",
            get(entity::get::<Colonies>)
                .put(entity::update::<Colonies>)
                .delete(entity::delete::<Colonies>),
        )
        // Queens
        .route(
            "/queens",
            post(entity::create::<Queens>).get(entity::list::<Queens>),
        )
        .route(
            "/queens/{queen_id}",
            get(entity::get::<Queens>)
                .put(entity::update::<Queens>)
                .delete(entity::delete::<Queens>),
        )
        // Inspections
        .route(
            "/inspections",
            post(entity::create::<Inspections>).get(entity::list::<Inspections>),
        )
        .route(
            "/inspections/{inspection_id}",
            get(entity::get::<Inspections>)
                .put(entity::update::<Inspections>)
                .delete(entity::delete::<Inspections>),
        )
        // Actions
        .route(
            "/actions",
            post(entity::create::<Actions>).get(entity::list::<Actions>),
        )
        .route(
            "/actions/{action_id}",
            get(entity::get::<Actions>)
                .put(entity::update::<Actions>)
                .delete(entity::delete::<Actions>),
        )
        // Observations
        .route(
            "/observations",
            post(entity::create::<Observations>).get(entity::list::<Observations>),
        )
        .route(
            "/observations/{observation_id}",
            get(entity::get::<Observations>)
                .put(entity::update::<Observations>)
                .delete(entity::delete::<Observations>),
        )
        // Sessions have no update route.
        .route(
            "/sessions",
            post(entity::create::<Sessions>).get(entity::list::<Sessions>),
        )
        .route(
            "/sessions/{session_id}",
            get(entity::get::<Sessions>).delete(entity::delete::<Sessions>),
        )
        // Listings under a parent
        .route(
            "/users/{user_id}/apiaries",
            get(entity::list_by_parent::<Apiaries>),
        )
        .route(
            "/users/{user_id}/sessions",
            get(entity::list_by_parent::<Sessions>),
        )
        .route(
            "/apiaries/{apiary_id}/hives",
            get(entity::list_by_parent::<Hives>),
        )
        .route(
            "/hives/{hive_id}/colonies",
            get(entity::list_by_parent::<Colonies>),
        )
        .route(
            "/colonies/{colony_id}/queens",
            get(entity::list_by_parent::<Queens>),
        )
        .route(
            "/colonies/{colony_id}/inspections",
            get(entity::list_by_parent::<Inspections>),
        )
        .route(
            "/inspections/{inspection_id}/actions",
            get(entity::list_by_parent::<Actions>),
        )
        .route(
            "/inspections/{inspection_id}/observations",
            get(entity::list_by_parent::<Observations>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
