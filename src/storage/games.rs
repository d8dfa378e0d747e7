use crate::config::GameConfig;
use crate::games::models::{Game, GuessOutcome, ResolutionTicket, RoundStart};
use crate::games::responses::{GuessSubmissionError, StartRoundError};
use crate::map::models::LatLng;
use crate::rounds::ResolveError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

// TODO: evict games nobody has touched for a while, they are kept for the process lifetime.
#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, Game>>>,
}

impl HashMapGamesStorage {
    pub async fn create(&self) -> String {
        let game_id = Uuid::new_v4().to_string();
        self.storage
            .write()
            .await
            .insert(game_id.clone(), Game::new());
        game_id
    }

    pub async fn get(&self, game_id: &str) -> Option<Game> {
        self.storage.read().await.get(game_id).cloned()
    }

    pub async fn begin_round(&self, game_id: &str) -> Result<ResolutionTicket, StartRoundError> {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .map(Game::begin_resolution)
            .ok_or(StartRoundError::GameNotFound)
    }

    /// Commits a resolution unless a newer round was started in the meantime.
    pub async fn complete_round(
        &self,
        game_id: &str,
        ticket: ResolutionTicket,
        outcome: Result<LatLng, ResolveError>,
    ) -> Result<RoundStart, StartRoundError> {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .ok_or(StartRoundError::GameNotFound)?
            .complete_resolution(ticket, outcome)
    }

    pub async fn abandon_round(&self, game_id: &str, ticket: ResolutionTicket) -> bool {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .is_some_and(|game| game.abandon_resolution(ticket))
    }

    pub async fn submit_guess(
        &self,
        game_id: &str,
        guess: LatLng,
        config: &GameConfig,
    ) -> Result<GuessOutcome, GuessSubmissionError> {
        self.storage
            .write()
            .await
            .get_mut(game_id)
            .ok_or(GuessSubmissionError::GameNotFound)?
            .submit_guess(guess, config)
    }
}
