// ABOUTME: HTTP request handlers for phone CRUD operations
// ABOUTME: camelCase query parameters per the external interface

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::info;

use crate::response::ApiError;
use crate::state::AppState;
use kiosk_storage::PhoneCreateInput;

/// List every phone, one `phoneID contactName phoneValue` line per record.
pub async fn read_phones(State(state): State<AppState>) -> Result<String, ApiError> {
    info!("Listing phones");

    let phones = state.phone_storage.list_phones().await?;
    Ok(phones
        .iter()
        .map(|p| format!("{} {} {}", p.phone_id, p.contact_name, p.phone_value))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Query parameters for creating or updating a phone
#[derive(Deserialize)]
pub struct PhoneParams {
    #[serde(rename = "contactName")]
    pub contact_name: String,
    #[serde(rename = "phoneValue")]
    pub phone_value: String,
}

impl From<PhoneParams> for PhoneCreateInput {
    fn from(params: PhoneParams) -> Self {
        PhoneCreateInput {
            contact_name: params.contact_name,
            phone_value: params.phone_value,
        }
    }
}

/// Create a phone and return the freshly assigned id.
pub async fn create_phone(
    State(state): State<AppState>,
    Query(params): Query<PhoneParams>,
) -> Result<(StatusCode, String), ApiError> {
    info!("Creating phone for contact: {}", params.contact_name);

    let phone_id = state.phone_storage.create_phone(params.into()).await?;
    Ok((StatusCode::CREATED, format!("OK {}", phone_id)))
}

/// Replace both fields of an existing phone. Missing id is a 404.
pub async fn update_phone(
    State(state): State<AppState>,
    Path(phone_id): Path<i64>,
    Query(params): Query<PhoneParams>,
) -> Result<&'static str, ApiError> {
    info!("Updating phone: {}", phone_id);

    state
        .phone_storage
        .update_phone(phone_id, params.into())
        .await?;
    Ok("ok")
}

/// Delete a phone. Missing id is a 404.
pub async fn delete_phone(
    State(state): State<AppState>,
    Path(phone_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    info!("Deleting phone: {}", phone_id);

    state.phone_storage.delete_phone(phone_id).await?;
    Ok("Ok")
}
