use axum::Json;

use super::prelude::*;
use crate::constants::TEXT_PLAIN_UTF8;

#[derive(Template, WebTemplate)]
#[template(path = "vehicle.html")]
pub(crate) struct VehiclePageTemplate {
    pub(crate) username: String,
    pub(crate) details: VehicleDetails,
}

#[derive(Template, WebTemplate)]
#[template(path = "vehicle_not_found.html")]
pub(crate) struct VehicleNotFoundTemplate {
    pub(crate) username: String,
}

async fn lookup(
    state: &AppState,
    username: &str,
) -> Result<(String, VehicleDetails), VehicleError> {
    let username = normalize_username_strict(username)?;
    debug!("Looking up vehicle for {username}");
    let details = state.vehicles.get_vehicle_details(&username).await?;
    Ok((username, details))
}

/// handles GET /{username}/vehicle.html
pub(crate) async fn vehicle_page_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    match lookup(&state, &username).await {
        Ok((username, details)) => VehiclePageTemplate { username, details }.into_response(),
        Err(VehicleError::UserNotFound(username)) => {
            (StatusCode::NOT_FOUND, VehicleNotFoundTemplate { username }).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// handles GET /{username}/vehicle
pub(crate) async fn vehicle_text_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, VehicleError> {
    let (_, details) = lookup(&state, &username).await?;
    Ok(([(CONTENT_TYPE, TEXT_PLAIN_UTF8)], details.to_string()).into_response())
}

/// handles GET /{username}/vehicle.json
pub(crate) async fn vehicle_json_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<VehicleDetails>, VehicleError> {
    let (_, details) = lookup(&state, &username).await?;
    Ok(Json(details))
}
