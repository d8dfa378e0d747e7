use crate::config::GameConfig;
use crate::panorama::{CountryGeocoder, PanoramaLookup};
use crate::rounds::RoundResolver;
use crate::storage::games::HashMapGamesStorage;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppContext {
    pub games: HashMapGamesStorage,
    pub resolver: Arc<RoundResolver>,
    pub config: Arc<GameConfig>,
    pub started_at: Instant,
}

pub fn init(
    config: Arc<GameConfig>,
    lookup: Arc<dyn PanoramaLookup>,
    geocoder: Arc<dyn CountryGeocoder>,
) -> AppContext {
    AppContext {
        games: HashMapGamesStorage::default(),
        resolver: Arc::new(RoundResolver::new(lookup, geocoder, config.clone())),
        config,
        started_at: Instant::now(),
    }
}
