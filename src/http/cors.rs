use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub fn layer(args: &Args) -> CorsLayer {
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring malformed CORS origin `{origin}`.");
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
