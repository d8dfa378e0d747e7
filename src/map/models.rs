use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Folds a point that went past a pole back over it and wraps longitude into
    /// [-180, 180).
    pub fn normalized(self) -> Self {
        let (mut lat, mut lng) = (self.lat, self.lng);
        if lat > 90.0 {
            lat = 180.0 - lat;
            lng += 180.0;
        } else if lat < -90.0 {
            lat = -180.0 - lat;
            lng += 180.0;
        }
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lng: ((lng + 180.0).rem_euclid(360.0) - 180.0).clamp(-180.0, 180.0),
        }
    }
}

/// Rectangular sampling region, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: LatLng) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lng_min..=self.lng_max).contains(&point.lng)
    }

    pub fn is_valid(&self) -> bool {
        let corners_valid = LatLng {
            lat: self.lat_min,
            lng: self.lng_min,
        }
        .is_valid()
            && LatLng {
                lat: self.lat_max,
                lng: self.lng_max,
            }
            .is_valid();
        corners_valid && self.lat_min < self.lat_max && self.lng_min < self.lng_max
    }
}

/// A population center used to bias seed sampling towards places with street coverage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitySeed {
    pub name: String,
    pub location: LatLng,
}

impl CitySeed {
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            location: LatLng { lat, lng },
        }
    }
}
