use clap::Parser;
use cli::Args;
use config::GameConfig;
use panorama::google::{GeocodingClient, StreetViewMetadataClient};
use std::net::SocketAddr;
use std::sync::Arc;

mod app_context;
mod cli;
mod config;
mod games;
mod health;
mod http;
mod logging;
mod map;
mod panorama;
mod rounds;
mod sampling;
mod settings;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();

    let config = match GameConfig::load(args.config.as_deref()) {
        Ok(config) => Arc::new(config),
        Err(err) => {
            tracing::error!(error = %err, "Refusing to start with a broken game configuration.");
            std::process::exit(1);
        }
    };
    tracing::info!(
        target_country = %config.target_country,
        max_attempts = config.max_attempts,
        decay_scale_km = config.decay_scale_km,
        cities = config.cities.len(),
        "Loaded game configuration."
    );

    let lookup = Arc::new(StreetViewMetadataClient::new(
        args.maps_api_url.clone(),
        args.google_maps_api_key.clone(),
    ));
    let geocoder = Arc::new(GeocodingClient::new(
        args.maps_api_url.clone(),
        args.google_maps_api_key.clone(),
    ));
    let app_context = app_context::init(config, lookup, geocoder);
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start the server.");
}
