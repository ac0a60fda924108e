//! Error handling

use std::fmt;

use axum::response::IntoResponse;
use tracing::info;

/// Errors raised while looking up or serving vehicles.
#[derive(Debug)]
pub enum VehicleError {
    /// The username in the path isn't one we'd ever store
    BadRequest(String),
    /// No vehicle is registered for this user
    UserNotFound(String),
    /// When DB operations fail
    DatabaseError(sea_orm::DbErr),
    /// When an internal server error occurs
    InternalServerError(String),
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleError::BadRequest(reason) => write!(f, "bad request: {reason}"),
            VehicleError::UserNotFound(username) => {
                write!(f, "no vehicle registered for user {username}")
            }
            VehicleError::DatabaseError(err) => write!(f, "database error: {err}"),
            VehicleError::InternalServerError(message) => {
                write!(f, "internal server error: {message}")
            }
        }
    }
}

impl std::error::Error for VehicleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VehicleError::DatabaseError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sea_orm::DbErr> for VehicleError {
    fn from(err: sea_orm::DbErr) -> Self {
        VehicleError::DatabaseError(err)
    }
}

impl IntoResponse for VehicleError {
    fn into_response(self) -> axum::response::Response {
        match self {
            VehicleError::BadRequest(reason) => {
                info!("Bad request received: {reason}");
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Bad Request"));
                *response.status_mut() = axum::http::StatusCode::BAD_REQUEST;
                response
            }
            VehicleError::UserNotFound(username) => {
                info!("No vehicle for {username}");
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Not Found"));
                *response.status_mut() = axum::http::StatusCode::NOT_FOUND;
                response
            }
            VehicleError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Database error"));
                *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
            VehicleError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                let mut response =
                    axum::response::Response::new(axum::body::Body::from("Internal server error"));
                *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                response
            }
        }
    }
}
