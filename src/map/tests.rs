use crate::config::GameConfig;
use crate::map::consts::EARTH_RADIUS_KM;
use crate::map::models::{BoundingBox, LatLng};
use crate::map::{haversine_km, score_from_km};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARIS: LatLng = LatLng {
    lat: 48.8566,
    lng: 2.3522,
};
const LYON: LatLng = LatLng {
    lat: 45.7640,
    lng: 4.8357,
};

fn random_point(rng: &mut StdRng) -> LatLng {
    LatLng {
        lat: rng.gen_range(-90.0..=90.0),
        lng: rng.gen_range(-180.0..=180.0),
    }
}

#[test]
fn test_paris_lyon_distance() {
    let distance = haversine_km(PARIS, LYON);

    assert!((distance - 392.0).abs() <= 2.0, "got {distance}");
}

#[test]
fn test_paris_lyon_score_with_national_scale() {
    let config = GameConfig {
        decay_scale_km: 217.0,
        ..GameConfig::default()
    };

    let distance = haversine_km(PARIS, LYON);
    let score = score_from_km(distance, &config);

    let expected = (5000.0 * (-distance / 217.0).exp()).round() as u64;
    assert_eq!(score, expected);
    assert!((810..=830).contains(&score), "got {score}");
}

#[test]
fn test_distance_is_symmetric_and_zero_on_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        assert!((forward - backward).abs() < 1e-9);
        assert_eq!(haversine_km(a, a), 0.0);
    }
}

#[test]
fn test_distance_is_bounded_by_half_circumference() {
    let max_distance = std::f64::consts::PI * EARTH_RADIUS_KM;
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10_000 {
        let distance = haversine_km(random_point(&mut rng), random_point(&mut rng));
        assert!((0.0..=max_distance + 1e-6).contains(&distance));
    }
}

#[test]
fn test_antipodal_points_do_not_produce_nan() {
    let distance = haversine_km(LatLng { lat: 0.0, lng: 0.0 }, LatLng { lat: 0.0, lng: 180.0 });

    assert!(!distance.is_nan());
    assert!((distance - 20015.0).abs() < 1.0);
}

#[test]
fn test_perfect_guess_scores_max() {
    let config = GameConfig::default();

    assert_eq!(score_from_km(0.0, &config), config.max_score);
}

#[test]
fn test_score_is_non_increasing_and_bounded() {
    let config = GameConfig::default();
    let mut previous = score_from_km(0.0, &config);
    let mut km = 0.0;
    while km <= 20_100.0 {
        let score = score_from_km(km, &config);
        assert!(score <= previous);
        assert!(score <= config.max_score);
        previous = score;
        km += 0.5;
    }
    assert_eq!(score_from_km(20_000.0, &config), 0);
}

#[test]
fn test_world_scale_keeps_far_guesses_rewarded() {
    let national = GameConfig::default();
    let world = GameConfig {
        decay_scale_km: 2000.0,
        ..GameConfig::default()
    };

    assert!(score_from_km(1000.0, &world) > score_from_km(1000.0, &national));
    assert!(score_from_km(20_000.0, &world) <= world.max_score);
}

#[test]
fn test_bounding_box_validity() {
    let bounds = GameConfig::default().bounds;
    assert!(bounds.is_valid());
    assert!(bounds.contains(PARIS));

    let degenerate = BoundingBox {
        lat_min: 45.0,
        lat_max: 45.0,
        ..bounds
    };
    assert!(!degenerate.is_valid());

    let out_of_range = BoundingBox {
        lat_max: 95.0,
        ..bounds
    };
    assert!(!out_of_range.is_valid());
}

#[test]
fn test_normalized_wraps_and_folds_coordinates() {
    let wrapped = LatLng {
        lat: -16.8,
        lng: 180.02,
    }
    .normalized();
    assert!((wrapped.lat - -16.8).abs() < 1e-12);
    assert!((wrapped.lng - -179.98).abs() < 1e-9);

    let folded = LatLng {
        lat: 90.01,
        lng: 10.0,
    }
    .normalized();
    assert!((folded.lat - 89.99).abs() < 1e-9);
    assert!((folded.lng - -170.0).abs() < 1e-9);

    let south = LatLng {
        lat: -90.5,
        lng: -100.0,
    }
    .normalized();
    assert!((south.lat - -89.5).abs() < 1e-9);
    assert!((south.lng - 80.0).abs() < 1e-9);

    let paris = PARIS.normalized();
    assert_eq!(paris.lat, PARIS.lat);
    assert!((paris.lng - PARIS.lng).abs() < 1e-9);
}
