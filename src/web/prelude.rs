pub(crate) use super::{AppState, normalize_username_strict};
pub(crate) use crate::error::VehicleError;
pub(crate) use crate::vehicles::VehicleDetails;
pub(crate) use askama::Template;
pub(crate) use askama_web::WebTemplate;
pub(crate) use axum::extract::{Path, State};
pub(crate) use axum::http::{StatusCode, header::CONTENT_TYPE};
pub(crate) use axum::response::{IntoResponse, Response};
pub(crate) use tracing::debug;
