use busboard::prelude::*;
use serde::Serialize;

/// Everything a selection widget can offer: distinct column values from the
/// loaded table plus the static catalogues.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub routes: Vec<String>,
    pub bus_types: Vec<String>,
    pub departures: Vec<String>,
    pub states: Vec<String>,
    pub categories: Vec<&'static str>,
    pub ac_types: Vec<&'static str>,
    pub rating_floors: Vec<&'static str>,
    pub price_bands: Vec<&'static str>,
    pub seat_bands: Vec<&'static str>,
    pub hour_windows: Vec<&'static str>,
}

impl OptionsResponse {
    pub fn new(repository: &Repository) -> Self {
        Self {
            routes: repository
                .route_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            bus_types: repository
                .bus_types()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            departures: repository
                .departures()
                .iter()
                .map(|time| time.to_hms_string())
                .collect(),
            states: repository
                .states()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            categories: vec![
                BusTypeCategory::Seater.label(),
                BusTypeCategory::SemiSleeper.label(),
                BusTypeCategory::Sleeper.label(),
                BusTypeCategory::Other.label(),
            ],
            ac_types: vec![AcType::Ac.label(), AcType::NonAc.label()],
            rating_floors: RATING_FLOORS.iter().map(|(label, _)| *label).collect(),
            price_bands: PRICE_BANDS.iter().map(|band| band.label).collect(),
            seat_bands: SEAT_BANDS.iter().map(|band| band.label).collect(),
            hour_windows: HOUR_WINDOWS.iter().map(|window| window.label).collect(),
        }
    }
}
