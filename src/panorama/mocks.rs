use crate::map::models::LatLng;
use crate::panorama::{CollaboratorError, CountryGeocoder, Panorama, PanoramaLookup};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

/// Answers every lookup the same way, placing found panoramas right on the seed.
pub struct StubLookup {
    calls: AtomicUsize,
    /// `None` for "no panorama", otherwise whether the panorama has links.
    has_links: Option<bool>,
}

impl StubLookup {
    pub fn not_found() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            has_links: None,
        }
    }

    pub fn linked() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            has_links: Some(true),
        }
    }

    pub fn isolated() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            has_links: Some(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PanoramaLookup for StubLookup {
    async fn nearest_panorama(
        &self,
        seed: LatLng,
        _radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.has_links.map(|has_links| Panorama {
            pano_id: None,
            location: seed,
            has_links,
        }))
    }
}

/// Fails every call with a network error.
#[derive(Default)]
pub struct BrokenLookup {
    calls: AtomicUsize,
}

impl BrokenLookup {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PanoramaLookup for BrokenLookup {
    async fn nearest_panorama(
        &self,
        _seed: LatLng,
        _radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CollaboratorError::Network(String::from("connection reset")))
    }
}

/// Never answers within any reasonable time.
pub struct HangingLookup;

#[async_trait]
impl PanoramaLookup for HangingLookup {
    async fn nearest_panorama(
        &self,
        _seed: LatLng,
        _radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }
}

/// Holds its first call until released and then answers with `gated_location`. Later calls
/// get a linked panorama on the seed right away.
pub struct GatedLookup {
    calls: AtomicUsize,
    entered: Notify,
    release: Notify,
    gated_location: LatLng,
}

impl GatedLookup {
    pub fn new(gated_location: LatLng) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
            gated_location,
        }
    }

    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl PanoramaLookup for GatedLookup {
    async fn nearest_panorama(
        &self,
        seed: LatLng,
        _radius_meters: f64,
    ) -> Result<Option<Panorama>, CollaboratorError> {
        let location = if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.entered.notify_one();
            self.release.notified().await;
            self.gated_location
        } else {
            seed
        };
        Ok(Some(Panorama {
            pano_id: None,
            location,
            has_links: true,
        }))
    }
}

/// Geocodes to `country` on the `nth` call (1-based) and every later one, and somewhere
/// else before that.
pub struct CountryOnNthCall {
    calls: AtomicUsize,
    nth: usize,
    country: String,
}

impl CountryOnNthCall {
    pub fn new(nth: usize, country: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            nth,
            country: country.to_string(),
        }
    }

    pub fn always(country: &str) -> Self {
        Self::new(1, country)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryGeocoder for CountryOnNthCall {
    async fn country_code(&self, _location: LatLng) -> Result<Option<String>, CollaboratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call >= self.nth {
            Ok(Some(self.country.clone()))
        } else {
            Ok(Some(String::from("ES")))
        }
    }
}

/// Finds no country anywhere, as over open sea.
#[derive(Default)]
pub struct NoCountry {
    calls: AtomicUsize,
}

impl NoCountry {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryGeocoder for NoCountry {
    async fn country_code(&self, _location: LatLng) -> Result<Option<String>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

/// Fails every call with a quota error.
#[derive(Default)]
pub struct BrokenGeocoder {
    calls: AtomicUsize,
}

impl BrokenGeocoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryGeocoder for BrokenGeocoder {
    async fn country_code(&self, _location: LatLng) -> Result<Option<String>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CollaboratorError::Api {
            status: String::from("OVER_QUERY_LIMIT"),
            message: String::from("You have exceeded your daily request quota."),
        })
    }
}

/// Never answers within any reasonable time.
#[derive(Default)]
pub struct HangingGeocoder {
    calls: AtomicUsize,
}

impl HangingGeocoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryGeocoder for HangingGeocoder {
    async fn country_code(&self, _location: LatLng) -> Result<Option<String>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Some(String::from("FR")))
    }
}
