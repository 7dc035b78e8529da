// ABOUTME: HTTP request handler for the CSV averaging report
// ABOUTME: Mean height/weight of the configured measurements file

use axum::extract::State;
use tracing::info;

use crate::response::ApiError;
use crate::state::AppState;

/// Average height (cm) and weight (kg) over the configured CSV.
pub async fn count_mean(State(state): State<AppState>) -> Result<String, ApiError> {
    info!("Computing measurement averages");

    let averages = kiosk_stats::mean_from_csv(&state.csv_path)?;
    Ok(format!(
        "Aver height: {}cm;\tAver weight: {}kg",
        averages.height_cm, averages.weight_kg
    ))
}
