//! Busboard is a local-first engine for filtering bus-trip datasets.
//!
//! A raw trip table is read through [`source`], normalized into typed rows by
//! [`repository`], and queried through [`query`], which composes independent
//! filter criteria into one predicate and projects the matching rows. Each
//! pass is request-scoped: load, normalize, filter, project, drop.

pub mod query;
pub mod repository;
pub mod shared;
pub mod source;

pub mod prelude {
    pub use crate::query::{
        Criteria, HOUR_WINDOWS, HourWindow, Outcome, PRICE_BANDS, Predicate, PriceBand,
        RATING_FLOORS, RatingFilter, SEAT_BANDS, SeatBand, TripView, project, rating_floor,
    };
    pub use crate::repository::{AcType, BusTypeCategory, Repository, Trip};
    pub use crate::shared::time::TimeOfDay;
    pub use crate::source::{Config, SourceReader};
}
