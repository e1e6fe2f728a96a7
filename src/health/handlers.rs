use crate::app_context::AppContext;
use crate::geocoding::Geocoder;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::SessionRepo;
use axum::extract::State;
use axum::response::Json;

pub async fn healthcheck<G>(State(app_context): State<AppContext<G>>) -> Json<HealthCheckResponse>
where
    G: Geocoder,
{
    Json(HealthCheckResponse {
        error: false,
        open_sessions: app_context.sessions.count().await,
    })
}
