// ABOUTME: HTTP request handlers for user CRUD operations
// ABOUTME: Query-validated create/update plus list and delete

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

use crate::response::ApiError;
use crate::state::AppState;
use kiosk_storage::UserCreateInput;

/// List every user, one `pk name age` line per record.
pub async fn read_all_users(State(state): State<AppState>) -> Result<String, ApiError> {
    info!("Listing users");

    let users = state.user_storage.list_users().await?;
    Ok(users
        .iter()
        .map(|u| format!("{} {} {}", u.pk, u.name, u.age))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Query parameters for creating a user
#[derive(Deserialize)]
pub struct CreateUserParams {
    pub name: String,
    pub age: i64,
}

/// Create a user and return the freshly assigned primary key.
pub async fn create_user(
    State(state): State<AppState>,
    Query(params): Query<CreateUserParams>,
) -> Result<(StatusCode, String), ApiError> {
    info!("Creating user: {}", params.name);

    let pk = state
        .user_storage
        .create_user(UserCreateInput {
            name: params.name,
            age: params.age,
        })
        .await?;

    Ok((StatusCode::CREATED, format!("OK {}", pk)))
}

/// Query parameters for updating a user
#[derive(Deserialize)]
pub struct UpdateUserParams {
    pub age: i64,
}

/// Update only the age of an existing user. Missing pk is a 404.
pub async fn update_user(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
    Query(params): Query<UpdateUserParams>,
) -> Result<&'static str, ApiError> {
    info!("Updating user: {}", pk);

    state.user_storage.update_age(pk, params.age).await?;
    Ok("ok")
}

/// Delete a user. Missing pk is a 404.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
) -> Result<&'static str, ApiError> {
    info!("Deleting user: {}", pk);

    state.user_storage.delete_user(pk).await?;
    Ok("Ok")
}
