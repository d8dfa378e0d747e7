use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about = "Street-level geography guessing game server")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// JSON file with game settings; built-in defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub google_maps_api_key: String,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/")]
    pub maps_api_url: Url,
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:5173", "http://localhost:5173"])]
    pub allowed_origins: Vec<String>,
}
