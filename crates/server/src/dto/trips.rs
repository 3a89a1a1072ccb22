use busboard::prelude::{Outcome, TripView};
use serde::Serialize;

/// Envelope for one filtering pass. `status` tells the display layer which
/// notice to show when `trips` is empty.
#[derive(Debug, Serialize)]
pub struct TripsResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub count: usize,
    pub trips: Vec<TripView>,
}

impl From<Outcome> for TripsResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NoData => Self {
                status: "no_data",
                message: Some("No data available. Please check the dataset."),
                count: 0,
                trips: Vec::new(),
            },
            Outcome::NoMatch => Self {
                status: "no_matches",
                message: Some("No buses match the selected criteria."),
                count: 0,
                trips: Vec::new(),
            },
            Outcome::Matches(trips) => Self {
                status: "ok",
                message: None,
                count: trips.len(),
                trips,
            },
        }
    }
}
