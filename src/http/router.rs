use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{games, health, settings};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let games_routes = Router::new()
        .route("/", post(games::handlers::create))
        .route("/:game_id", get(games::handlers::status))
        .route("/:game_id/rounds", post(games::handlers::start_round))
        .route("/:game_id/guess", post(games::handlers::submit_guess));

    Router::new()
        .nest("/health", health_routes)
        .route("/settings", get(settings::handlers::settings))
        .nest("/games", games_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
