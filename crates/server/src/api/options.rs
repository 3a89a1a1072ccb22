use std::{collections::HashMap, sync::Arc};

use crate::{dto::OptionsResponse, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The selection catalogues: distinct column values from the current
/// dataset plus the static bucket and threshold labels.
pub async fn options(
    Query(_): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = super::load_repository(&state);
    Ok(Json(OptionsResponse::new(&repository)).into_response())
}
