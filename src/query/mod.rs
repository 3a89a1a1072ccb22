mod buckets;
mod project;

pub use buckets::*;
pub use project::*;

use crate::{
    repository::{AcType, BusTypeCategory, Trip},
    shared::time::TimeOfDay,
};

/// Star-rating criterion. `Any` places no restriction, `AtLeast` unions the
/// chosen floors, `Within` is an inclusive range.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum RatingFilter {
    #[default]
    Any,
    AtLeast(Vec<f64>),
    Within {
        min: f64,
        max: f64,
    },
}

impl RatingFilter {
    fn matches(&self, rating: f64) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(floors) => floors.iter().any(|floor| rating >= *floor),
            Self::Within { min, max } => rating >= *min && rating <= *max,
        }
    }

    fn is_active(&self) -> bool {
        match self {
            Self::Any => false,
            Self::AtLeast(floors) => !floors.is_empty(),
            Self::Within { .. } => true,
        }
    }
}

/// One user interaction's worth of filter selections, passed into the
/// pipeline as an explicit, immutable configuration object. Every category
/// is optional; an empty or `None` selection places no restriction.
#[derive(Debug, Default, Clone)]
pub struct Criteria {
    pub route: Option<String>,
    pub departure: Option<TimeOfDay>,
    pub state: Option<String>,
    pub category: Option<BusTypeCategory>,
    pub bus_types: Vec<String>,
    pub ac_types: Vec<AcType>,
    pub rating: RatingFilter,
    pub price_bands: Vec<PriceBand>,
    pub seat_bands: Vec<SeatBand>,
    pub hour_windows: Vec<HourWindow>,
}

impl Criteria {
    /// One predicate per category with an active selection. Categories left
    /// at their identity contribute nothing, so the conjunction over the
    /// returned set is exactly the user's restriction.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(route) = &self.route {
            predicates.push(Predicate::Route(route.clone()));
        }
        if let Some(departure) = self.departure {
            predicates.push(Predicate::Departure(departure));
        }
        if let Some(state) = &self.state {
            predicates.push(Predicate::State(state.clone()));
        }
        if !self.bus_types.is_empty() {
            predicates.push(Predicate::BusTypes(self.bus_types.clone()));
        }
        if !self.ac_types.is_empty() {
            predicates.push(Predicate::AcTypes(self.ac_types.clone()));
        }
        if self.rating.is_active() {
            predicates.push(Predicate::Rating(self.rating.clone()));
        }
        if !self.price_bands.is_empty() {
            predicates.push(Predicate::PriceBands(self.price_bands.clone()));
        }
        if !self.seat_bands.is_empty() {
            predicates.push(Predicate::SeatBands(self.seat_bands.clone()));
        }
        if !self.hour_windows.is_empty() {
            predicates.push(Predicate::HourWindows(self.hour_windows.clone()));
        }
        if let Some(category) = self.category {
            predicates.push(Predicate::Category(category));
        }
        predicates
    }

    /// The conjunction of every active category predicate.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.predicates()
            .iter()
            .all(|predicate| predicate.matches(trip))
    }
}

/// A single category's row test. Within a category the chosen options are
/// unioned; across categories predicates are intersected. A row missing the
/// filtered field never matches.
#[derive(Debug, Clone)]
pub enum Predicate {
    Route(String),
    Departure(TimeOfDay),
    State(String),
    BusTypes(Vec<String>),
    AcTypes(Vec<AcType>),
    Rating(RatingFilter),
    PriceBands(Vec<PriceBand>),
    SeatBands(Vec<SeatBand>),
    HourWindows(Vec<HourWindow>),
    Category(BusTypeCategory),
}

impl Predicate {
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            Self::Route(route) => trip.route_name.as_deref() == Some(route.as_str()),
            Self::Departure(departure) => trip.departure == Some(*departure),
            Self::State(state) => trip.state.as_deref() == Some(state.as_str()),
            Self::BusTypes(bus_types) => trip
                .bus_type
                .as_deref()
                .is_some_and(|value| bus_types.iter().any(|choice| choice == value)),
            Self::AcTypes(ac_types) => trip
                .ac_type()
                .is_some_and(|value| ac_types.contains(&value)),
            Self::Rating(filter) => trip
                .star_rating
                .is_some_and(|rating| filter.matches(rating)),
            Self::PriceBands(bands) => trip
                .price
                .is_some_and(|price| bands.iter().any(|band| band.contains(price))),
            Self::SeatBands(bands) => trip
                .seat_availability
                .is_some_and(|seats| bands.iter().any(|band| band.contains(seats))),
            Self::HourWindows(windows) => trip
                .departure_hour()
                .is_some_and(|hour| windows.iter().any(|window| window.contains(hour))),
            Self::Category(category) => trip.category() == Some(*category),
        }
    }
}
