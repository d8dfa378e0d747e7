use crate::app_context::AppContext;
use crate::settings::responses::SettingsResponse;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn settings(State(app_context): State<AppContext>) -> Json<SettingsResponse> {
    let config = &app_context.config;
    Json(SettingsResponse {
        max_score: config.max_score,
        decay_scale_km: config.decay_scale_km,
        bounds: config.bounds,
        target_country: config.target_country.clone(),
    })
}
