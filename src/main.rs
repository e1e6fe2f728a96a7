use clap::Parser;
use cli::errors::ConfigError;
use std::process::ExitCode;

mod app_context;
mod cli;
mod deliveries;
mod geocoding;
mod health;
mod http;
mod logging;
mod map;
mod storage;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init();

    let router = match build_router(&args) {
        Ok(router) => router,
        Err(error) => {
            tracing::error!(error = %error, "Refusing to start with invalid configuration.");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(error = %error, listen_address = %args.listen_address, "Failed to bind.");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(listen_address = %args.listen_address, "Serving delivery map.");
    if let Err(error) = axum::serve(listener, router).await {
        tracing::error!(error = %error, "Server stopped unexpectedly.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build_router(args: &cli::Args) -> Result<axum::Router, ConfigError> {
    let geocoder = geocoding::init(args)?;
    let map_settings = map::init(args)?;
    let app_context = app_context::init(args, geocoder, map_settings);
    crate::http::router::new(args, app_context)
}
