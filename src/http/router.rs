use crate::app_context::AppContext;
use crate::cli::errors::ConfigError;
use crate::cli::Args;
use crate::deliveries::handlers;
use crate::geocoding::Geocoder;
use crate::{health, http::cors, http::pages};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new<G: Geocoder>(args: &Args, app_context: AppContext<G>) -> Result<Router, ConfigError> {
    let cors_policy = cors::layer(args)?;
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<G>));
    let address_routes = Router::new()
        .route("/", post(handlers::select_address::<G>))
        .route("/candidates", get(handlers::address_candidates::<G>));
    let sessions_routes = Router::new()
        .route("/", post(handlers::create::<G>))
        .route(
            "/:session-id",
            get(handlers::snapshot::<G>).delete(handlers::close::<G>),
        )
        .route("/:session-id/name", post(handlers::set_name::<G>))
        .route(
            "/:session-id/complement",
            post(handlers::set_complement::<G>),
        )
        .route("/:session-id/map-click", post(handlers::click_map::<G>))
        .route("/:session-id/submit", post(handlers::submit::<G>))
        .route("/:session-id/deliveries", get(handlers::deliveries::<G>))
        .route("/:session-id/map", get(handlers::map_view::<G>))
        .nest("/:session-id/address", address_routes);

    Ok(Router::new()
        .route("/", get(pages::index))
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing)))
}
