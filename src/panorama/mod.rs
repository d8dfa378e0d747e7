use crate::map::models::LatLng;
use async_trait::async_trait;
use thiserror::Error;

pub mod google;
#[cfg(test)]
pub mod mocks;
pub mod responses;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    #[error("API returned status `{status}`: {message}")]
    Api { status: String, message: String },
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("no response within {0:?}")]
    Timeout(std::time::Duration),
}

impl From<reqwest::Error> for CollaboratorError {
    fn from(err: reqwest::Error) -> Self {
        CollaboratorError::Network(err.to_string())
    }
}

/// A street-level panorama node returned by the lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Panorama {
    pub pano_id: Option<String>,
    pub location: LatLng,
    /// Whether the node connects to neighbouring panoramas.
    pub has_links: bool,
}

#[async_trait]
pub trait PanoramaLookup: Send + Sync {
    /// Nearest panorama within `radius_meters` of `seed`, `None` when there is none.
    async fn nearest_panorama(
        &self,
        seed: LatLng,
        radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError>;
}

#[async_trait]
pub trait CountryGeocoder: Send + Sync {
    /// Short country code of the place at `location`, if any.
    async fn country_code(&self, location: LatLng) -> Result<Option<String>, CollaboratorError>;
}
