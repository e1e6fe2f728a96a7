use crate::deliveries::models::LookupFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("geocoding request failed")]
    Network(#[from] reqwest::Error),
    #[error("geocoding service returned no features")]
    NoResults,
    #[error("query `{0}` can't be placed into the geocoding URL")]
    InvalidUrl(String),
}

impl GeocodingError {
    /// The failure as the address field reports it.
    pub fn kind(&self) -> LookupFailure {
        match self {
            GeocodingError::NoResults => LookupFailure::NoResults,
            GeocodingError::Network(_) | GeocodingError::InvalidUrl(_) => LookupFailure::Network,
        }
    }
}
