use crate::app_context::AppContext;
use crate::games::responses::{
    CreateGameResponse, GameStatusResponse, StartRoundResponse, SubmitGuessResponse,
};
use crate::games::services::{CreateGameHttpHandler, GamesHttpHandler};
use crate::map::models::LatLng;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(State(app_context): State<AppContext>) -> Json<CreateGameResponse> {
    let response = CreateGameHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn status(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Json<GameStatusResponse> {
    let response = GamesHttpHandler::new(app_context, game_id).status().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn start_round(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext>,
) -> Json<StartRoundResponse> {
    let response = GamesHttpHandler::new(app_context, game_id)
        .start_round()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(game_id): Path<String>,
    State(app_context): State<AppContext>,
    Json(guess): Json<LatLng>,
) -> Json<SubmitGuessResponse> {
    let response = GamesHttpHandler::new(app_context, game_id)
        .submit_guess(guess)
        .await;
    Json(response)
}
