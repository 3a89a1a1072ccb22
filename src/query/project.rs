use rayon::prelude::*;
use serde::Serialize;

use crate::{
    query::Criteria,
    repository::{Repository, Trip},
};

/// The outcome of one filtering pass. `NoData` (nothing to filter) and
/// `NoMatch` (the filters excluded everything) are distinct terminal states
/// so the display layer can word its notice accordingly.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NoData,
    NoMatch,
    Matches(Vec<TripView>),
}

impl Outcome {
    pub fn rows(&self) -> &[TripView] {
        match self {
            Self::Matches(rows) => rows,
            _ => &[],
        }
    }
}

/// Applies each active predicate in turn, producing a fresh filtered view
/// per step, then projects the survivors. Intersection semantics make the
/// application order irrelevant.
pub fn project(repository: &Repository, criteria: &Criteria) -> Outcome {
    if repository.is_empty() {
        return Outcome::NoData;
    }

    let mut rows: Vec<&Trip> = repository.trips.iter().collect();
    for predicate in criteria.predicates() {
        rows = rows
            .into_par_iter()
            .filter(|trip| predicate.matches(trip))
            .collect();
        if rows.is_empty() {
            return Outcome::NoMatch;
        }
    }

    Outcome::Matches(rows.into_iter().map(TripView::from).collect())
}

/// One projected row, ready for display: every normalized column plus the
/// rendered A/C class. The scratch coach category stays internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripView {
    pub route_name: Option<String>,
    pub start_place: Option<String>,
    pub reach_place: Option<String>,
    pub bus_type: Option<String>,
    pub ac_type: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub star_rating: Option<f64>,
    pub price: Option<f64>,
    pub seat_availability: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl From<&Trip> for TripView {
    fn from(trip: &Trip) -> Self {
        Self {
            route_name: trip.route_name.as_deref().map(str::to_string),
            start_place: trip.start_place.as_deref().map(str::to_string),
            reach_place: trip.reach_place.as_deref().map(str::to_string),
            bus_type: trip.bus_type.as_deref().map(str::to_string),
            ac_type: trip.ac_type().map(|ac| ac.label().to_string()),
            departure: trip.departure.map(|time| time.to_hms_string()),
            arrival: trip.arrival.map(|time| time.to_hms_string()),
            star_rating: trip.star_rating,
            price: trip.price,
            seat_availability: trip.seat_availability,
            state: trip.state.as_deref().map(str::to_string),
        }
    }
}
