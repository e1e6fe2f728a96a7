use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display/value pair shown by the address field. Both halves always carry the same text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressSelection {
    pub label: String,
    pub value: String,
}

impl AddressSelection {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// One autocomplete option, built from a geocoding feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressCandidate {
    pub label: String,
    pub value: String,
    /// `[lng, lat]`, exactly as the geocoding service returned it.
    pub coords: [f64; 2],
    pub place: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    pub name: String,
    pub complement: String,
    pub address: Option<AddressSelection>,
    pub position: Option<LatLng>,
}

impl PendingEntry {
    pub fn state(&self) -> PendingEntryState {
        if !self.name.is_empty() && self.address.is_some() {
            PendingEntryState::Ready
        } else if *self == Self::default() {
            PendingEntryState::Empty
        } else {
            PendingEntryState::PartiallyFilled
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PendingEntryState {
    Empty,
    PartiallyFilled,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    pub name: String,
    pub address: AddressSelection,
    pub complement: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Delivery {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// What the address field should show about the last map click lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum LookupStatus {
    #[default]
    Idle,
    Resolving,
    Failed { reason: LookupFailure },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupFailure {
    Network,
    NoResults,
}
