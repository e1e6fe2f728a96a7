use thiserror::Error;

/// Configuration problems detected at startup, before the listener is bound.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no Mapbox access token, set `MAPBOX_ACCESS_TOKEN` or pass `--mapbox-access-token`")]
    MissingAccessToken,
    #[error("tile URL template `{0}` must contain `{{z}}`, `{{x}}` and `{{y}}`")]
    InvalidTileUrl(String),
    #[error("`{0}` is not a valid CORS origin")]
    InvalidOrigin(String),
    #[error("failed to build the geocoding HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
