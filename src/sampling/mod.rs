use crate::config::GameConfig;
use crate::map::consts::KM_PER_DEGREE;
use crate::map::models::LatLng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;


/// One candidate seed handed to the panorama lookup.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequest {
    pub seed: LatLng,
    pub search_radius_meters: f64,
}

pub fn sample<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> SampleRequest {
    if rng.gen::<f64>() < config.urban_probability {
        if let Some(city) = config.cities.choose(rng) {
            return SampleRequest {
                seed: offset_within_disk(rng, city.location, config.urban_radius_km),
                search_radius_meters: config.urban_search_radius_m,
            };
        }
    }
    let bounds = &config.bounds;
    SampleRequest {
        seed: LatLng {
            lat: rng.gen_range(bounds.lat_min..bounds.lat_max),
            lng: rng.gen_range(bounds.lng_min..bounds.lng_max),
        },
        search_radius_meters: config.rural_search_radius_m,
    }
}

/// Polar offset around `center`. The radius is drawn linearly rather than by area, which
/// clusters points towards the center.
fn offset_within_disk<R: Rng + ?Sized>(rng: &mut R, center: LatLng, max_km: f64) -> LatLng {
    let angle = rng.gen::<f64>() * TAU;
    let distance_km = rng.gen::<f64>() * max_km;
    let delta_lat = distance_km * angle.cos() / KM_PER_DEGREE;
    let delta_lng = distance_km * angle.sin() / (KM_PER_DEGREE * center.lat.to_radians().cos());
    // At a pole every longitude is the same point.
    let delta_lng = if delta_lng.is_finite() { delta_lng } else { 0.0 };
    LatLng {
        lat: center.lat + delta_lat,
        lng: center.lng + delta_lng,
    }
    .normalized()
}
