pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Length of one degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
