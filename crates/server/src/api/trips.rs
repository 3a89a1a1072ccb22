use std::{collections::HashMap, sync::Arc};

use crate::{dto::TripsResponse, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use busboard::prelude::*;

/// One fetch-normalize-filter-project pass. Selections arrive as query
/// parameters; lists are comma-separated, bucket selections go by their
/// catalogue label. An unknown label is the caller's mistake, a failing
/// dataset is not.
pub async fn trips(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let criteria = parse_criteria(&params)?;
    let repository = super::load_repository(&state);
    let outcome = repository.select(&criteria);
    Ok(Json(TripsResponse::from(outcome)).into_response())
}

fn parse_criteria(params: &HashMap<String, String>) -> Result<Criteria, StatusCode> {
    let mut criteria = Criteria::default();

    if let Some(route) = params.get("route") {
        criteria.route = Some(route.clone());
    }
    if let Some(raw) = params.get("departure") {
        let departure = TimeOfDay::from_hms(raw).ok_or(StatusCode::BAD_REQUEST)?;
        criteria.departure = Some(departure);
    }
    if let Some(value) = params.get("state") {
        criteria.state = Some(value.clone());
    }
    if let Some(label) = params.get("category") {
        let category = BusTypeCategory::from_label(label).ok_or(StatusCode::BAD_REQUEST)?;
        criteria.category = Some(category);
    }
    if let Some(raw) = params.get("bus_type") {
        criteria.bus_types = raw.split(',').map(str::to_string).collect();
    }
    if let Some(raw) = params.get("ac_type") {
        criteria.ac_types = parse_list(raw, AcType::from_label)?;
    }
    if let Some(raw) = params.get("rating") {
        criteria.rating = RatingFilter::AtLeast(parse_list(raw, rating_floor)?);
    }
    if let (Some(min), Some(max)) = (params.get("rating_min"), params.get("rating_max")) {
        let min = min.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        let max = max.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        criteria.rating = RatingFilter::Within { min, max };
    }
    if let Some(raw) = params.get("price") {
        criteria.price_bands = parse_list(raw, PriceBand::from_label)?;
    }
    if let Some(raw) = params.get("seats") {
        criteria.seat_bands = parse_list(raw, SeatBand::from_label)?;
    }
    if let Some(raw) = params.get("hours") {
        criteria.hour_windows = parse_list(raw, HourWindow::from_label)?;
    }

    Ok(criteria)
}

fn parse_list<T, F>(raw: &str, parse: F) -> Result<Vec<T>, StatusCode>
where
    F: Fn(&str) -> Option<T>,
{
    raw.split(',')
        .map(|part| parse(part.trim()).ok_or(StatusCode::BAD_REQUEST))
        .collect()
}
