//! HTTP routes for the vehicle pages
use std::num::NonZeroU16;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::{error, info};

use crate::constants::MAX_USERNAME_LENGTH;
use crate::error::VehicleError;
use crate::vehicles::UserVehicleService;

mod prelude;
mod views;

use views::{vehicle_json_handler, vehicle_page_handler, vehicle_text_handler};

#[derive(Clone)]
pub(crate) struct AppState {
    vehicles: Arc<dyn UserVehicleService>,
}

impl AppState {
    fn new(vehicles: Arc<dyn UserVehicleService>) -> Self {
        Self { vehicles }
    }
}

/// Trims and lowercases a username
pub fn normalize_username(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Normalizes a username and rejects anything that isn't 1-32 characters of `[a-z0-9_-]`.
pub fn normalize_username_strict(name: &str) -> Result<String, VehicleError> {
    let name = normalize_username(name);
    if name.is_empty() || name.len() > MAX_USERNAME_LENGTH {
        return Err(VehicleError::BadRequest(format!(
            "username must be 1-{MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(VehicleError::BadRequest(format!(
            "invalid characters in username {name:?}"
        )));
    }
    Ok(name)
}

fn create_router() -> Router<AppState> {
    Router::new()
        .route("/{username}/vehicle.html", get(vehicle_page_handler))
        .route("/{username}/vehicle", get(vehicle_text_handler))
        .route("/{username}/vehicle.json", get(vehicle_json_handler))
}

/// Builds the web layer around whatever [`UserVehicleService`] it is handed.
pub fn app(vehicles: Arc<dyn UserVehicleService>) -> Router {
    create_router().with_state(AppState::new(vehicles))
}

/// Binds to `listen_addr:port` and serves until the listener fails.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    vehicles: Arc<dyn UserVehicleService>,
) -> Result<(), anyhow::Error> {
    let app = app(vehicles);

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}
