use crate::app_context::{AppContext, RequestContext};
use crate::deliveries::models::AddressCandidate;
use crate::deliveries::requests::TextFieldRequest;
use crate::deliveries::responses::{
    CandidatesResponse, CloseSessionResponse, CreateSessionResponse, DeliveriesResponse,
    LocationResponse, MapViewResponse, SessionResponse, SetFieldResponse, SubmitDeliveryResponse,
};
use crate::deliveries::services::{CreateSessionHttpHandler, DeliveryFormHttpHandler};
use crate::geocoding::Geocoder;
use crate::http::query_params::SearchQueryParam;
use crate::map::models::LatLng;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use uuid::Uuid;

pub async fn create<G>(State(app_context): State<AppContext<G>>) -> Json<CreateSessionResponse>
where
    G: Geocoder,
{
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

pub async fn snapshot<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
) -> Json<SessionResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .snapshot()
        .await;
    Json(response)
}

pub async fn close<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
) -> Json<CloseSessionResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .close()
        .await;
    Json(response)
}

pub async fn set_name<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
    Json(payload): Json<TextFieldRequest>,
) -> Json<SetFieldResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .set_name(payload.value)
        .await;
    Json(response)
}

pub async fn set_complement<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
    Json(payload): Json<TextFieldRequest>,
) -> Json<SetFieldResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .set_complement(payload.value)
        .await;
    Json(response)
}

pub async fn click_map<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
    Json(position): Json<LatLng>,
) -> Json<LocationResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .click_map(position)
        .await;
    Json(response)
}

pub async fn address_candidates<G>(
    Path(session_id): Path<Uuid>,
    Query(SearchQueryParam { query }): Query<SearchQueryParam>,
    State(app_context): State<AppContext<G>>,
) -> Json<CandidatesResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .search(query)
        .await;
    Json(response)
}

pub async fn select_address<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
    Json(candidate): Json<AddressCandidate>,
) -> Json<LocationResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .select_address(candidate)
        .await;
    Json(response)
}

pub async fn submit<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
) -> Json<SubmitDeliveryResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .submit()
        .await;
    Json(response)
}

pub async fn deliveries<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
) -> Json<DeliveriesResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .deliveries()
        .await;
    Json(response)
}

pub async fn map_view<G>(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<G>>,
) -> Json<MapViewResponse>
where
    G: Geocoder,
{
    let request_context = RequestContext { session_id };
    let response = DeliveryFormHttpHandler::new(app_context, &request_context)
        .map_view()
        .await;
    Json(response)
}
