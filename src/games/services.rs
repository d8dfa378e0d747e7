use crate::app_context::AppContext;
use crate::games::models::ResolutionTicket;
use crate::games::responses::{
    CreateGameResponse, GameStatusError, GameStatusResponse, StartRoundError, StartRoundResponse,
    SubmitGuessResponse,
};
use crate::map::models::LatLng;
use crate::storage::games::HashMapGamesStorage;

pub struct CreateGameHttpHandler {
    app_context: AppContext,
}

impl CreateGameHttpHandler {
    pub fn new(app_context: AppContext) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateGameResponse {
        let game_id = self.app_context.games.create().await;
        tracing::info!(task = "game_created", game_id = %game_id);
        CreateGameResponse { game_id }
    }
}

pub struct GamesHttpHandler {
    app_context: AppContext,
    game_id: String,
}

impl GamesHttpHandler {
    pub fn new(app_context: AppContext, game_id: String) -> Self {
        Self {
            app_context,
            game_id,
        }
    }

    pub async fn status(&self) -> GameStatusResponse {
        match self.app_context.games.get(&self.game_id).await {
            Some(game) => GameStatusResponse {
                error: false,
                error_code: None,
                status: Some(game.status),
                rounds_played: Some(game.rounds_played),
                total_score: Some(game.total_score),
            },
            None => GameStatusResponse {
                error: true,
                error_code: Some(GameStatusError::GameNotFound),
                status: None,
                rounds_played: None,
                total_score: None,
            },
        }
    }

    pub async fn start_round(&self) -> StartRoundResponse {
        let ticket = match self.app_context.games.begin_round(&self.game_id).await {
            Ok(ticket) => ticket,
            Err(error_code) => return start_round_failed(error_code),
        };
        let mut pending = PendingRound {
            games: self.app_context.games.clone(),
            game_id: self.game_id.clone(),
            ticket: Some(ticket),
        };
        let outcome = self
            .app_context
            .resolver
            .find_panorama(self.app_context.config.max_attempts)
            .await;
        let committed = self
            .app_context
            .games
            .complete_round(&self.game_id, ticket, outcome)
            .await;
        pending.settle();
        match committed {
            Ok(round) => StartRoundResponse {
                error: false,
                error_code: None,
                round: Some(round),
            },
            Err(error_code) => {
                if error_code == StartRoundError::RoundSuperseded {
                    tracing::info!(
                        task = "round_superseded",
                        game_id = %self.game_id,
                        "Discarded the result of an outdated round."
                    );
                }
                start_round_failed(error_code)
            }
        }
    }

    pub async fn submit_guess(&self, guess: LatLng) -> SubmitGuessResponse {
        match self
            .app_context
            .games
            .submit_guess(&self.game_id, guess, &self.app_context.config)
            .await
        {
            Ok(outcome) => {
                tracing::info!(
                    task = "guess_scored",
                    game_id = %self.game_id,
                    round_number = outcome.round_number,
                    distance_km = outcome.result.distance_km,
                    score = outcome.result.score,
                );
                SubmitGuessResponse {
                    error: false,
                    error_code: None,
                    outcome: Some(outcome),
                }
            }
            Err(error_code) => SubmitGuessResponse {
                error: true,
                error_code: Some(error_code),
                outcome: None,
            },
        }
    }
}

/// Returns the game to idle when the request resolving its round is dropped before the
/// result is committed, e.g. because the client disconnected.
struct PendingRound {
    games: HashMapGamesStorage,
    game_id: String,
    ticket: Option<ResolutionTicket>,
}

impl PendingRound {
    fn settle(&mut self) {
        self.ticket = None;
    }
}

impl Drop for PendingRound {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let games = self.games.clone();
        let game_id = std::mem::take(&mut self.game_id);
        runtime.spawn(async move {
            if games.abandon_round(&game_id, ticket).await {
                tracing::info!(
                    task = "round_abandoned",
                    game_id = %game_id,
                    "Round resolution was cancelled."
                );
            }
        });
    }
}

fn start_round_failed(error_code: StartRoundError) -> StartRoundResponse {
    StartRoundResponse {
        error: true,
        error_code: Some(error_code),
        round: None,
    }
}
