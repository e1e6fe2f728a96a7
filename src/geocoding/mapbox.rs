use crate::cli::errors::ConfigError;
use crate::deliveries::models::AddressSelection;
use crate::geocoding::errors::GeocodingError;
use crate::geocoding::models::{Feature, FeatureCollection};
use crate::geocoding::Geocoder;
use crate::map::models::LatLng;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Client for the Mapbox places API.
#[derive(Clone, Debug)]
pub struct MapboxGeocoder {
    http_client: Client,
    base_url: Url,
    access_token: String,
}

impl MapboxGeocoder {
    const PLACES_ENDPOINT: &'static str = "geocoding/v5/mapbox.places/";

    pub fn new(
        mut base_url: Url,
        access_token: String,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        // Joining onto a path without a trailing slash would replace its last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            http_client,
            base_url,
            access_token,
        })
    }

    /// `{base}/geocoding/v5/mapbox.places/{query}.json?access_token=...` with the query
    /// percent-encoded as a single path segment.
    pub fn places_url(&self, query: &str) -> Result<Url, GeocodingError> {
        let invalid_url = || GeocodingError::InvalidUrl(query.to_string());
        let mut url = self
            .base_url
            .join(Self::PLACES_ENDPOINT)
            .map_err(|_| invalid_url())?;
        url.path_segments_mut()
            .map_err(|_| invalid_url())?
            .pop_if_empty()
            .push(&format!("{query}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    async fn fetch_features(&self, query: &str) -> Result<Vec<Feature>, GeocodingError> {
        let url = self.places_url(query)?;
        let start_time = Instant::now();
        let result = self.request_features(url).await;
        let elapsed_time = start_time.elapsed().as_millis();

        match &result {
            Ok(features) => tracing::info!(
                task = "geocoding_request",
                query = %query,
                features_count = features.len(),
                processing_time_ms = elapsed_time,
            ),
            Err(error) => tracing::warn!(
                task = "geocoding_request",
                query = %query,
                error = %error,
                processing_time_ms = elapsed_time,
            ),
        }
        result
    }

    async fn request_features(&self, url: Url) -> Result<Vec<Feature>, GeocodingError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        let collection: FeatureCollection = response.json().await?;
        Ok(collection.features)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn reverse_geocode(&self, position: LatLng) -> Result<AddressSelection, GeocodingError> {
        let query = format!("{},{}", position.lng, position.lat);
        self.fetch_features(&query)
            .await?
            .into_iter()
            .next()
            .map(|feature| AddressSelection::from_label(feature.place_name))
            .ok_or(GeocodingError::NoResults)
    }

    async fn forward_search(&self, query: &str) -> Result<Vec<Feature>, GeocodingError> {
        self.fetch_features(query).await
    }
}
