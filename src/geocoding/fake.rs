use crate::deliveries::models::AddressSelection;
use crate::geocoding::errors::GeocodingError;
use crate::geocoding::models::Feature;
use crate::geocoding::Geocoder;
use crate::map::models::LatLng;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory geocoder with canned answers and optional per-query delays.
#[derive(Clone, Default)]
pub struct FakeGeocoder {
    places: HashMap<String, Vec<Feature>>,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    reverse_label: Option<String>,
    reverse_delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, query: &str, features: Vec<Feature>) -> Self {
        self.places.insert(query.to_string(), features);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Forward searches for `query` fail as if the service could not be reached.
    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    /// Every reverse lookup resolves to `label`; without one they fail with `NoResults`.
    pub fn with_reverse_label(mut self, label: &str) -> Self {
        self.reverse_label = Some(label.to_string());
        self
    }

    pub fn with_reverse_delay(mut self, delay: Duration) -> Self {
        self.reverse_delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn feature(place_name: &str, center: [f64; 2]) -> Feature {
    Feature {
        place_name: place_name.to_string(),
        center,
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn reverse_geocode(&self, _position: LatLng) -> Result<AddressSelection, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.reverse_delay).await;
        self.reverse_label
            .as_deref()
            .map(|label| AddressSelection::from_label(label))
            .ok_or(GeocodingError::NoResults)
    }

    async fn forward_search(&self, query: &str) -> Result<Vec<Feature>, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(query) {
            return Err(GeocodingError::InvalidUrl(query.to_string()));
        }
        Ok(self.places.get(query).cloned().unwrap_or_default())
    }
}
