// ABOUTME: HTTP API layer for Kiosk providing routes and handlers
// ABOUTME: Integration layer that depends on all domain packages

use axum::{routing::get, Router};

pub mod datagen_handlers;
pub mod handlers;
pub mod phones_handlers;
pub mod response;
pub mod space_handlers;
pub mod state;
pub mod stats_handlers;
pub mod users_handlers;


pub use state::AppState;

/// Creates the users CRUD router (nested under /users)
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/read-all", get(users_handlers::read_all_users))
        .route("/create", get(users_handlers::create_user))
        .route("/update/{pk}", get(users_handlers::update_user))
        .route("/delete/{pk}", get(users_handlers::delete_user))
}

/// Creates the phones CRUD router (nested under /phones)
pub fn create_phones_router() -> Router<AppState> {
    Router::new()
        .route("/read", get(phones_handlers::read_phones))
        .route("/create", get(phones_handlers::create_phone))
        .route("/update/{phone_id}", get(phones_handlers::update_phone))
        .route("/delete/{phone_id}", get(phones_handlers::delete_phone))
}

/// Creates the full application router with its state attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello_world))
        .route("/path/sub-path/etc", get(handlers::path_example))
        .route("/hello", get(handlers::hello))
        .route("/requirements", get(handlers::read_requirements))
        .route(
            "/generate-password/{length}",
            get(datagen_handlers::generate_password),
        )
        .route(
            "/generate-users/",
            get(datagen_handlers::generate_users_default),
        )
        .route(
            "/generate-users/{count}",
            get(datagen_handlers::generate_users),
        )
        .route("/example-request", get(space_handlers::example_request))
        .route("/space/", get(space_handlers::count_astronauts))
        .route("/mean/", get(stats_handlers::count_mean))
        .nest("/users", create_users_router())
        .nest("/phones", create_phones_router())
        .with_state(state)
}
