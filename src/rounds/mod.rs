use crate::config::GameConfig;
use crate::map::models::LatLng;
use crate::panorama::{CollaboratorError, CountryGeocoder, PanoramaLookup};
use crate::sampling::{self, SampleRequest};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("no usable panorama in `{country}` after {attempts} attempts")]
    NotFound { country: String, attempts: u32 },
}

/// Why a single attempt didn't produce a round location.
#[derive(Debug)]
enum Miss {
    NoPanorama,
    Isolated,
    WrongCountry(Option<String>),
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::NoPanorama => write!(f, "no panorama nearby"),
            Miss::Isolated => write!(f, "panorama has no links"),
            Miss::WrongCountry(Some(country)) => write!(f, "panorama is in `{country}`"),
            Miss::WrongCountry(None) => write!(f, "panorama is outside of any country"),
        }
    }
}

/// Turns random seeds into a panorama location inside the target country.
pub struct RoundResolver {
    lookup: Arc<dyn PanoramaLookup>,
    geocoder: Arc<dyn CountryGeocoder>,
    config: Arc<GameConfig>,
}

impl RoundResolver {
    pub fn new(
        lookup: Arc<dyn PanoramaLookup>,
        geocoder: Arc<dyn CountryGeocoder>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            lookup,
            geocoder,
            config,
        }
    }

    /// Tries up to `max_attempts` seeds one after another and returns the first accepted
    /// panorama. Misses and collaborator failures only consume an attempt.
    pub async fn find_panorama(&self, max_attempts: u32) -> Result<LatLng, ResolveError> {
        for attempt in 1..=max_attempts {
            let request = {
                let mut rng = rand::thread_rng();
                sampling::sample(&mut rng, &self.config)
            };
            match self.attempt(request).await {
                Ok(Ok(location)) => {
                    tracing::info!(
                        task = "round_resolved",
                        attempt,
                        lat = location.lat,
                        lng = location.lng,
                    );
                    return Ok(location);
                }
                Ok(Err(miss)) => {
                    tracing::debug!(task = "panorama_attempt", attempt, miss = %miss);
                }
                Err(err) => {
                    tracing::warn!(task = "panorama_attempt", attempt, error = %err);
                }
            }
        }
        tracing::warn!(
            task = "round_resolved",
            attempts = max_attempts,
            "Gave up looking for a panorama."
        );
        Err(ResolveError::NotFound {
            country: self.config.target_country.clone(),
            attempts: max_attempts,
        })
    }

    async fn attempt(
        &self,
        request: SampleRequest,
    ) -> Result<Result<LatLng, Miss>, CollaboratorError> {
        let panorama = self
            .limited(
                self.lookup
                    .nearest_panorama(request.seed, request.search_radius_meters),
            )
            .await?;
        let Some(panorama) = panorama else {
            return Ok(Err(Miss::NoPanorama));
        };
        if !panorama.has_links {
            return Ok(Err(Miss::Isolated));
        }
        let country = self
            .limited(self.geocoder.country_code(panorama.location))
            .await?;
        if country.as_deref() != Some(self.config.target_country.as_str()) {
            return Ok(Err(Miss::WrongCountry(country)));
        }
        tracing::debug!(pano_id = ?panorama.pano_id, "Accepted panorama.");
        Ok(Ok(panorama.location))
    }

    async fn limited<T>(
        &self,
        call: impl Future<Output = Result<T, CollaboratorError>>,
    ) -> Result<T, CollaboratorError> {
        match self.config.lookup_timeout() {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_elapsed| CollaboratorError::Timeout(limit))?,
            None => call.await,
        }
    }
}
