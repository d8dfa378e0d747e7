use crate::map::cities::french_cities;
use crate::map::models::{BoundingBox, CitySeed};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read game configuration from `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse game configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid game configuration: {0}")]
    Invalid(String),
}

/// Process-wide game settings, read once at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub max_score: u64,
    /// Distance at which the score decays to `1/e` of `max_score`.
    pub decay_scale_km: f64,
    pub urban_probability: f64,
    pub urban_radius_km: f64,
    pub urban_search_radius_m: f64,
    pub rural_search_radius_m: f64,
    pub bounds: BoundingBox,
    /// ISO 3166-1 alpha-2 code a panorama must geocode to.
    pub target_country: String,
    pub max_attempts: u32,
    pub lookup_timeout_ms: Option<u64>,
    pub cities: Vec<CitySeed>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_score: 5000,
            decay_scale_km: 150.0,
            urban_probability: 0.85,
            urban_radius_km: 4.0,
            urban_search_radius_m: 800.0,
            rural_search_radius_m: 3000.0,
            bounds: BoundingBox {
                lat_min: 41.3,
                lat_max: 51.1,
                lng_min: -5.1,
                lng_max: 9.6,
            },
            target_country: String::from("FR"),
            max_attempts: 30,
            lookup_timeout_ms: None,
            cities: french_cities(),
        }
    }
}

impl GameConfig {
    /// Reads the configuration from a JSON file, or uses the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_json(&raw)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score == 0 {
            return Err(invalid("`maxScore` must be positive"));
        }
        if !is_positive(self.decay_scale_km) {
            return Err(invalid("`decayScaleKm` must be a positive number"));
        }
        if !(0.0..=1.0).contains(&self.urban_probability) {
            return Err(invalid("`urbanProbability` must be within [0, 1]"));
        }
        if !is_positive(self.urban_radius_km) {
            return Err(invalid("`urbanRadiusKm` must be a positive number"));
        }
        if !is_positive(self.urban_search_radius_m) || !is_positive(self.rural_search_radius_m) {
            return Err(invalid("search radii must be positive numbers"));
        }
        if !self.bounds.is_valid() {
            return Err(invalid(
                "`bounds` must lie within [-90, 90] x [-180, 180] with min < max",
            ));
        }
        if self.target_country.len() != 2
            || !self.target_country.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(invalid("`targetCountry` must be a two-letter uppercase code"));
        }
        if self.max_attempts == 0 {
            return Err(invalid("`maxAttempts` must be positive"));
        }
        if self.lookup_timeout_ms == Some(0) {
            return Err(invalid("`lookupTimeoutMs` must be positive when set"));
        }
        if self.urban_probability > 0.0 && self.cities.is_empty() {
            return Err(invalid("`cities` can't be empty when `urbanProbability` > 0"));
        }
        if let Some(city) = self.cities.iter().find(|city| !city.location.is_valid()) {
            return Err(ConfigError::Invalid(format!(
                "city `{}` has out-of-range coordinates",
                city.name
            )));
        }
        Ok(())
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid(reason.to_string())
}
