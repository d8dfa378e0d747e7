use crate::config::GameConfig;
use consts::EARTH_RADIUS_KM;
use models::LatLng;

pub mod cities;
pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` slightly above 1, where `asin` is undefined.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Exponential decay from `max_score` at zero distance towards 0.
pub fn score_from_km(km: f64, config: &GameConfig) -> u64 {
    let max_score = config.max_score as f64;
    let score = (max_score * (-km.max(0.0) / config.decay_scale_km).exp()).round();
    score.clamp(0.0, max_score) as u64
}
