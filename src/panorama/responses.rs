use crate::map::models::LatLng;
use serde::Deserialize;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
pub const STATUS_NOT_FOUND: &str = "NOT_FOUND";

#[derive(Debug, Deserialize)]
pub struct StreetViewMetadataResponse {
    pub status: String,
    pub pano_id: Option<String>,
    pub location: Option<LatLng>,
    pub copyright: Option<String>,
    pub error_message: Option<String>,
}

impl StreetViewMetadataResponse {
    /// Official captures are part of the navigable street graph, user photospheres are not.
    pub fn is_official_capture(&self) -> bool {
        self.copyright
            .as_deref()
            .is_some_and(|copyright| copyright.contains("Google"))
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    pub fn country_code(&self) -> Option<String> {
        self.results
            .iter()
            .flat_map(|result| result.address_components.iter())
            .find(|component| component.types.iter().any(|kind| kind == "country"))
            .map(|component| component.short_name.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
