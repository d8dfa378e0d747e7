use crate::map::models::BoundingBox;
use serde::Serialize;

/// The part of the game configuration a client needs to draw its maps and score.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub max_score: u64,
    pub decay_scale_km: f64,
    pub bounds: BoundingBox,
    pub target_country: String,
}
