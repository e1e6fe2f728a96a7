use crate::app_context::{AppContext, RequestContext};
use crate::deliveries::autocomplete::{self, SearchStart};
use crate::deliveries::form::LocationUpdate;
use crate::deliveries::models::{AddressCandidate, PendingEntryState};
use crate::deliveries::responses::{
    CandidatesResponse, CloseSessionResponse, CreateSessionResponse, DeliveriesResponse,
    FormSnapshot, LocationResponse, LocationResponseError, MapViewResponse, SearchResponseError,
    SessionResponse, SessionResponseError, SetFieldResponse, SubmitDeliveryError,
    SubmitDeliveryResponse,
};
use crate::geocoding::Geocoder;
use crate::map::models::LatLng;
use crate::map::view::MapView;
use crate::storage::interface::{DeliveryFormRepo, SessionRepo};

pub struct CreateSessionHttpHandler<G: Geocoder> {
    app_context: AppContext<G>,
}

impl<G: Geocoder> CreateSessionHttpHandler<G> {
    pub fn new(app_context: AppContext<G>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        let evicted = self.app_context.sessions.evict_idle().await;
        if evicted > 0 {
            tracing::info!(task = "sessions_evicted", evicted = evicted);
        }
        let session_id = self.app_context.sessions.create().await;
        let sessions_count = self.app_context.sessions.count().await;
        tracing::info!(
            task = "session_opened",
            session_id = %session_id,
            sessions_count = sessions_count,
        );
        CreateSessionResponse { session_id }
    }
}

pub struct DeliveryFormHttpHandler<'a, G: Geocoder> {
    app_context: AppContext<G>,
    request_context: &'a RequestContext,
}

impl<'a, G> DeliveryFormHttpHandler<'a, G>
where
    G: Geocoder,
{
    pub fn new(app_context: AppContext<G>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn snapshot(&self) -> SessionResponse {
        let form = self
            .app_context
            .sessions
            .read(self.request_context.session_id, |form| FormSnapshot {
                pending: form.pending().clone(),
                state: form.state(),
                map_location: form.map_location(),
                lookup_status: form.lookup_status().clone(),
                query: form.autocomplete().query().to_string(),
                candidates: form.autocomplete().candidates().to_vec(),
                search_failure: form.autocomplete().failure(),
                deliveries: form.deliveries().to_vec(),
            })
            .await;
        match form {
            Some(form) => SessionResponse {
                error: false,
                error_code: None,
                form: Some(form),
            },
            None => SessionResponse {
                error: true,
                error_code: Some(SessionResponseError::SessionNotFound),
                form: None,
            },
        }
    }

    pub async fn close(&self) -> CloseSessionResponse {
        let session_id = self.request_context.session_id;
        if !self.app_context.sessions.remove(session_id).await {
            return CloseSessionResponse {
                error: true,
                error_code: Some(SessionResponseError::SessionNotFound),
            };
        }
        tracing::info!(task = "session_closed", session_id = %session_id);
        CloseSessionResponse {
            error: false,
            error_code: None,
        }
    }

    pub async fn set_name(&self, name: String) -> SetFieldResponse {
        let state = self
            .app_context
            .sessions
            .update(self.request_context.session_id, |form| {
                form.set_name(name);
                form.state()
            })
            .await;
        set_field_response(state)
    }

    pub async fn set_complement(&self, complement: String) -> SetFieldResponse {
        let state = self
            .app_context
            .sessions
            .update(self.request_context.session_id, |form| {
                form.set_complement(complement);
                form.state()
            })
            .await;
        set_field_response(state)
    }

    /// Moves the map to `position` and fills the address from a reverse lookup of it.
    pub async fn click_map(&self, position: LatLng) -> LocationResponse {
        if !position.is_finite() {
            return LocationResponse::failed(LocationResponseError::InvalidCoordinate);
        }
        let session_id = self.request_context.session_id;
        let Some(token) = self
            .app_context
            .sessions
            .update(session_id, |form| form.on_map_clicked(position))
            .await
        else {
            return LocationResponse::failed(LocationResponseError::SessionNotFound);
        };

        let lookup = self
            .app_context
            .geocoder
            .reverse_geocode(position)
            .await
            .map_err(|error| error.kind());

        let resolved = self
            .app_context
            .sessions
            .update(session_id, |form| {
                let outcome = form.resolve_map_click(token, position, lookup);
                (outcome, form.pending().clone(), form.map_location())
            })
            .await;
        let Some((outcome, pending, map_location)) = resolved else {
            return LocationResponse::failed(LocationResponseError::SessionNotFound);
        };
        let error_code: Option<LocationResponseError> = match outcome {
            LocationUpdate::Failed { reason } => Some(reason.into()),
            _ => None,
        };
        LocationResponse {
            error: error_code.is_some(),
            error_code,
            outcome: Some(outcome),
            pending: Some(pending),
            map_location: Some(map_location),
        }
    }

    pub async fn search(&self, query: String) -> CandidatesResponse {
        let session_id = self.request_context.session_id;
        let Some(start) = self
            .app_context
            .sessions
            .update(session_id, |form| form.autocomplete_mut().begin(&query))
            .await
        else {
            return CandidatesResponse {
                error: true,
                error_code: Some(SearchResponseError::SessionNotFound),
                candidates: Vec::new(),
                stale: false,
            };
        };
        let token = match start {
            SearchStart::Skipped => {
                return CandidatesResponse {
                    error: false,
                    error_code: None,
                    candidates: Vec::new(),
                    stale: false,
                };
            }
            SearchStart::Lookup(token) => token,
        };

        let result = autocomplete::search_candidates(&self.app_context.geocoder, &query)
            .await
            .map_err(|error| error.kind());

        let resolved = self
            .app_context
            .sessions
            .update(session_id, |form| {
                let outcome = form.autocomplete_mut().resolve(token, result);
                (outcome, form.autocomplete().candidates().to_vec())
            })
            .await;
        match resolved {
            Some((outcome, candidates)) => CandidatesResponse::from_outcome(outcome, candidates),
            None => CandidatesResponse {
                error: true,
                error_code: Some(SearchResponseError::SessionNotFound),
                candidates: Vec::new(),
                stale: false,
            },
        }
    }

    pub async fn select_address(&self, candidate: AddressCandidate) -> LocationResponse {
        if !LatLng::from_lng_lat(candidate.coords).is_finite() {
            return LocationResponse::failed(LocationResponseError::InvalidCoordinate);
        }
        let selected = self
            .app_context
            .sessions
            .update(self.request_context.session_id, |form| {
                form.on_address_selected(candidate);
                (form.pending().clone(), form.map_location())
            })
            .await;
        match selected {
            Some((pending, map_location)) => LocationResponse {
                error: false,
                error_code: None,
                outcome: None,
                pending: Some(pending),
                map_location: Some(map_location),
            },
            None => LocationResponse::failed(LocationResponseError::SessionNotFound),
        }
    }

    pub async fn submit(&self) -> SubmitDeliveryResponse {
        let session_id = self.request_context.session_id;
        let submitted = self
            .app_context
            .sessions
            .update(session_id, |form| form.submit())
            .await;
        match submitted {
            Some(Ok(delivery)) => {
                tracing::info!(
                    task = "delivery_submitted",
                    session_id = %session_id,
                    delivery_id = %delivery.id,
                );
                SubmitDeliveryResponse {
                    error: false,
                    error_code: None,
                    delivery: Some(delivery),
                }
            }
            Some(Err(validation_error)) => {
                tracing::debug!(
                    session_id = %session_id,
                    "Rejected delivery submission: {validation_error}."
                );
                SubmitDeliveryResponse {
                    error: true,
                    error_code: Some(validation_error.into()),
                    delivery: None,
                }
            }
            None => SubmitDeliveryResponse {
                error: true,
                error_code: Some(SubmitDeliveryError::SessionNotFound),
                delivery: None,
            },
        }
    }

    pub async fn deliveries(&self) -> DeliveriesResponse {
        let deliveries = self
            .app_context
            .sessions
            .read(self.request_context.session_id, |form| {
                form.deliveries().to_vec()
            })
            .await;
        DeliveriesResponse {
            error: deliveries.is_none(),
            error_code: deliveries
                .is_none()
                .then_some(SessionResponseError::SessionNotFound),
            deliveries,
        }
    }

    pub async fn map_view(&self) -> MapViewResponse {
        let map_settings = &self.app_context.map_settings;
        let map = self
            .app_context
            .sessions
            .read(self.request_context.session_id, |form| {
                MapView::build(form, map_settings)
            })
            .await;
        MapViewResponse {
            error: map.is_none(),
            error_code: map
                .is_none()
                .then_some(SessionResponseError::SessionNotFound),
            map,
        }
    }
}

fn set_field_response(state: Option<PendingEntryState>) -> SetFieldResponse {
    match state {
        Some(state) => SetFieldResponse {
            error: false,
            error_code: None,
            state: Some(state),
        },
        None => SetFieldResponse {
            error: true,
            error_code: Some(SessionResponseError::SessionNotFound),
            state: None,
        },
    }
}
