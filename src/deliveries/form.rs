use crate::deliveries::autocomplete::AddressAutocomplete;
use crate::deliveries::models::{
    AddressCandidate, AddressSelection, Delivery, LookupFailure, LookupStatus, PendingEntry,
    PendingEntryState,
};
use crate::map::consts::INITIAL_LOCATION;
use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub type LocationToken = u64;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationUpdate {
    Applied,
    Failed { reason: LookupFailure },
    /// A later click, pick or submit happened while the lookup was in flight.
    Stale,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the delivery needs a name")]
    MissingName,
    #[error("the delivery needs an address")]
    MissingAddress,
}

/// The delivery being composed plus everything already confirmed in this session.
///
/// `pending.address` and `pending.position` only ever change together. Actions that pick
/// a location issue a new [`LocationToken`], so a reverse lookup that resolves after a
/// newer action is dropped instead of overwriting it.
#[derive(Clone, Debug)]
pub struct DeliveryForm {
    pending: PendingEntry,
    deliveries: Vec<Delivery>,
    map_location: LatLng,
    location_token: LocationToken,
    lookup_status: LookupStatus,
    autocomplete: AddressAutocomplete,
}

impl Default for DeliveryForm {
    fn default() -> Self {
        Self {
            pending: PendingEntry::default(),
            deliveries: Vec::new(),
            map_location: INITIAL_LOCATION,
            location_token: 0,
            lookup_status: LookupStatus::Idle,
            autocomplete: AddressAutocomplete::default(),
        }
    }
}

impl DeliveryForm {
    pub fn set_name(&mut self, name: String) {
        self.pending.name = name;
    }

    pub fn set_complement(&mut self, complement: String) {
        self.pending.complement = complement;
    }

    pub fn on_map_clicked(&mut self, position: LatLng) -> LocationToken {
        self.map_location = position;
        self.lookup_status = LookupStatus::Resolving;
        self.next_location_token()
    }

    pub fn resolve_map_click(
        &mut self,
        token: LocationToken,
        position: LatLng,
        result: Result<AddressSelection, LookupFailure>,
    ) -> LocationUpdate {
        if token != self.location_token {
            return LocationUpdate::Stale;
        }
        match result {
            Ok(address) => {
                self.pending.address = Some(address);
                self.pending.position = Some(position);
                self.lookup_status = LookupStatus::Idle;
                LocationUpdate::Applied
            }
            Err(reason) => {
                self.lookup_status = LookupStatus::Failed { reason };
                LocationUpdate::Failed { reason }
            }
        }
    }

    pub fn on_address_selected(&mut self, candidate: AddressCandidate) {
        let position = LatLng::from_lng_lat(candidate.coords);
        self.pending.position = Some(position);
        self.pending.address = Some(AddressSelection::from_label(candidate.label));
        self.map_location = position;
        self.lookup_status = LookupStatus::Idle;
        self.next_location_token();
    }

    pub fn submit(&mut self) -> Result<Delivery, ValidationError> {
        if self.pending.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let (Some(address), Some(position)) = (&self.pending.address, self.pending.position)
        else {
            return Err(ValidationError::MissingAddress);
        };
        let delivery = Delivery {
            id: Uuid::new_v4(),
            name: self.pending.name.clone(),
            address: address.clone(),
            complement: self.pending.complement.clone(),
            latitude: position.lat,
            longitude: position.lng,
        };
        self.deliveries.push(delivery.clone());
        self.pending = PendingEntry::default();
        self.lookup_status = LookupStatus::Idle;
        self.next_location_token();
        Ok(delivery)
    }

    pub fn state(&self) -> PendingEntryState {
        self.pending.state()
    }

    pub fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn map_location(&self) -> LatLng {
        self.map_location
    }

    pub fn lookup_status(&self) -> &LookupStatus {
        &self.lookup_status
    }

    pub fn autocomplete(&self) -> &AddressAutocomplete {
        &self.autocomplete
    }

    pub fn autocomplete_mut(&mut self) -> &mut AddressAutocomplete {
        &mut self.autocomplete
    }

    fn next_location_token(&mut self) -> LocationToken {
        self.location_token += 1;
        self.location_token
    }
}
