// ABOUTME: HTTP request handlers proxying third-party APIs
// ABOUTME: Astronaut count plus a fixed-URL status echo

use axum::extract::State;
use tracing::info;

use crate::response::ApiError;
use crate::state::AppState;
use kiosk_config::constants::STATUS_ECHO_URL;

/// Report how many people are in space right now, and who they are.
pub async fn count_astronauts(State(state): State<AppState>) -> Result<String, ApiError> {
    info!("Counting astronauts");

    let astronauts = state.upstream.astronauts().await?;
    Ok(format!(
        "{} astronauts: [{}]",
        astronauts.count,
        astronauts.names.join(", ")
    ))
}

/// Echo the status code of a GET against a fixed example URL.
pub async fn example_request(State(state): State<AppState>) -> Result<String, ApiError> {
    let status = state.upstream.status_of(STATUS_ECHO_URL).await?;
    Ok(status.to_string())
}
