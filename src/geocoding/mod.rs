use crate::cli::errors::ConfigError;
use crate::cli::Args;
use crate::deliveries::models::AddressSelection;
use crate::map::models::LatLng;
use async_trait::async_trait;
use errors::GeocodingError;
use mapbox::MapboxGeocoder;
use models::Feature;
use std::time::Duration;

pub mod errors;
#[cfg(test)]
pub mod fake;
pub mod mapbox;
pub mod models;
#[cfg(test)]
pub mod tests;

#[async_trait]
pub trait Geocoder: Clone + Send + Sync + 'static {
    /// Place name of the first feature found at `position`.
    async fn reverse_geocode(&self, position: LatLng) -> Result<AddressSelection, GeocodingError>;

    /// Raw features matching free text, in the order the service ranked them.
    async fn forward_search(&self, query: &str) -> Result<Vec<Feature>, GeocodingError>;
}

pub fn init(args: &Args) -> Result<MapboxGeocoder, ConfigError> {
    let access_token = args
        .mapbox_access_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ConfigError::MissingAccessToken)?;
    let geocoder = MapboxGeocoder::new(
        args.geocoding_url.clone(),
        access_token.to_string(),
        Duration::from_millis(args.geocoding_timeout_ms),
    )?;
    tracing::info!(geocoding_url = %args.geocoding_url, "Initialized geocoding client.");
    Ok(geocoder)
}
