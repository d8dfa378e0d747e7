use crate::logging::consts::DEFAULT_CLIENT_IP;
use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = client_ip(&request);

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        status = response.status().as_u16(),
        client_ip = %client_ip,
        processing_time_us = elapsed_time.as_micros() as u64,
    );

    response
}

/// Prefers the proxy-reported address over the socket peer.
fn client_ip(request: &Request) -> IpAddr {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|value| value.trim().parse().ok())
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(address)| address.ip())
        })
        .unwrap_or(DEFAULT_CLIENT_IP)
}
