use clap::Parser;
use std::net::SocketAddr;
use url::Url;

pub mod errors;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Access token for the Mapbox places API.
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub mapbox_access_token: Option<String>,
    #[arg(long)]
    #[arg(default_value = "https://api.mapbox.com/")]
    pub geocoding_url: Url,
    /// Timeout applied to every outbound geocoding request.
    #[arg(long)]
    #[arg(default_value_t = 5000)]
    pub geocoding_timeout_ms: u64,
    /// Raster tile URL template, must contain `{z}`, `{x}` and `{y}`.
    #[arg(long)]
    #[arg(default_value = "https://tile.openstreetmap.org/{z}/{x}/{y}.png")]
    pub tile_url: String,
    #[arg(long)]
    #[arg(
        default_value = "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
    )]
    pub tile_attribution: String,
    /// Sessions untouched for this long are dropped when the next one is opened.
    #[arg(long)]
    #[arg(default_value_t = 1800)]
    pub session_idle_timeout_secs: u64,
    /// Origins allowed to call the API from another host, comma separated.
    #[arg(long = "allowed-origin", value_delimiter = ',')]
    #[arg(default_value = "http://localhost:8080,http://127.0.0.1:8080")]
    pub allowed_origins: Vec<String>,
}
