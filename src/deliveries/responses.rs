use crate::deliveries::autocomplete::SearchOutcome;
use crate::deliveries::form::{LocationUpdate, ValidationError};
use crate::deliveries::models::{
    AddressCandidate, Delivery, LookupFailure, LookupStatus, PendingEntry, PendingEntryState,
};
use crate::map::models::LatLng;
use crate::map::view::MapView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionResponseError {
    SessionNotFound,
}

/// The whole state of one session's form, as the page renders it.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub pending: PendingEntry,
    pub state: PendingEntryState,
    pub map_location: LatLng,
    pub lookup_status: LookupStatus,
    pub query: String,
    pub candidates: Vec<AddressCandidate>,
    pub search_failure: Option<LookupFailure>,
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormSnapshot>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFieldResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PendingEntryState>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LocationResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<LocationUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_location: Option<LatLng>,
}

impl LocationResponse {
    pub fn failed(error_code: LocationResponseError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            outcome: None,
            pending: None,
            map_location: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationResponseError {
    SessionNotFound,
    InvalidCoordinate,
    Network,
    NoResults,
}

impl From<LookupFailure> for LocationResponseError {
    fn from(failure: LookupFailure) -> Self {
        match failure {
            LookupFailure::Network => LocationResponseError::Network,
            LookupFailure::NoResults => LocationResponseError::NoResults,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatesResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SearchResponseError>,
    pub candidates: Vec<AddressCandidate>,
    /// A newer query superseded this one; `candidates` are the ones currently committed.
    pub stale: bool,
}

impl CandidatesResponse {
    pub fn from_outcome(outcome: SearchOutcome, candidates: Vec<AddressCandidate>) -> Self {
        match outcome {
            SearchOutcome::Updated => Self {
                error: false,
                error_code: None,
                candidates,
                stale: false,
            },
            SearchOutcome::Failed { reason } => Self {
                error: true,
                error_code: Some(reason.into()),
                candidates,
                stale: false,
            },
            SearchOutcome::Stale => Self {
                error: false,
                error_code: None,
                candidates,
                stale: true,
            },
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchResponseError {
    SessionNotFound,
    Network,
    NoResults,
}

impl From<LookupFailure> for SearchResponseError {
    fn from(failure: LookupFailure) -> Self {
        match failure {
            LookupFailure::Network => SearchResponseError::Network,
            LookupFailure::NoResults => SearchResponseError::NoResults,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDeliveryResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SubmitDeliveryError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitDeliveryError {
    SessionNotFound,
    MissingName,
    MissingAddress,
}

impl From<ValidationError> for SubmitDeliveryError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingName => SubmitDeliveryError::MissingName,
            ValidationError::MissingAddress => SubmitDeliveryError::MissingAddress,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveriesResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<Vec<Delivery>>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapView>,
}
