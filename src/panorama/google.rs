use crate::map::models::LatLng;
use crate::panorama::responses::{
    GeocodeResponse, StreetViewMetadataResponse, STATUS_NOT_FOUND, STATUS_OK, STATUS_ZERO_RESULTS,
};
use crate::panorama::{CollaboratorError, CountryGeocoder, Panorama, PanoramaLookup};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const STREET_VIEW_METADATA_PATH: &str = "maps/api/streetview/metadata";
const GEOCODE_PATH: &str = "maps/api/geocode/json";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared plumbing of the Maps web-service clients.
#[derive(Clone, Debug)]
struct MapsApi {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl MapsApi {
    fn new(mut base_url: Url, api_key: String) -> Self {
        // Relative joins replace the last segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, CollaboratorError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| CollaboratorError::Network(err.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, CollaboratorError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn format_location(location: LatLng) -> String {
    format!("{},{}", location.lat, location.lng)
}

#[derive(Clone, Debug)]
pub struct StreetViewMetadataClient {
    api: MapsApi,
}

impl StreetViewMetadataClient {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            api: MapsApi::new(base_url, api_key),
        }
    }
}

#[async_trait]
impl PanoramaLookup for StreetViewMetadataClient {
    async fn nearest_panorama(
        &self,
        seed: LatLng,
        radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError> {
        let url = self.api.endpoint(
            STREET_VIEW_METADATA_PATH,
            &[
                ("location", format_location(seed)),
                ("radius", format!("{}", radius_meters.round() as u64)),
                ("source", String::from("outdoor")),
            ],
        )?;
        let metadata: StreetViewMetadataResponse = self.api.get(url).await?;
        panorama_from_metadata(metadata)
    }
}

pub fn panorama_from_metadata(
    metadata: StreetViewMetadataResponse,
) -> Result<Option<Panorama>, CollaboratorError> {
    match metadata.status.as_str() {
        STATUS_OK => {
            let has_links = metadata.is_official_capture();
            Ok(metadata.location.map(|location| Panorama {
                pano_id: metadata.pano_id,
                location,
                has_links,
            }))
        }
        STATUS_ZERO_RESULTS | STATUS_NOT_FOUND => Ok(None),
        _ => Err(CollaboratorError::Api {
            message: metadata.error_message.unwrap_or_default(),
            status: metadata.status,
        }),
    }
}

#[derive(Clone, Debug)]
pub struct GeocodingClient {
    api: MapsApi,
}

impl GeocodingClient {
    pub fn new(base_url: Url, api_key: String) -> Self {
        Self {
            api: MapsApi::new(base_url, api_key),
        }
    }
}

#[async_trait]
impl CountryGeocoder for GeocodingClient {
    async fn country_code(&self, location: LatLng) -> Result<Option<String>, CollaboratorError> {
        let url = self.api.endpoint(
            GEOCODE_PATH,
            &[
                ("latlng", format_location(location)),
                ("result_type", String::from("country")),
            ],
        )?;
        let response: GeocodeResponse = self.api.get(url).await?;
        country_from_geocode(response)
    }
}

pub fn country_from_geocode(response: GeocodeResponse) -> Result<Option<String>, CollaboratorError> {
    match response.status.as_str() {
        STATUS_OK => Ok(response.country_code()),
        STATUS_ZERO_RESULTS => Ok(None),
        _ => Err(CollaboratorError::Api {
            message: response.error_message.unwrap_or_default(),
            status: response.status,
        }),
    }
}
