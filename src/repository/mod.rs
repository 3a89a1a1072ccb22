use std::{sync::Arc, time::Instant};

use rayon::prelude::*;
use tracing::debug;

mod entities;
pub mod normalize;
pub use entities::*;

use crate::{
    query::{self, Criteria, Outcome},
    shared::time::TimeOfDay,
    source::{self, SourceReader},
};

/// The normalized, request-scoped trip table, plus the selection catalogues
/// derived from its distinct column values.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub trips: Box<[Trip]>,

    route_names: Box<[Arc<str>]>,
    bus_types: Box<[Arc<str>]>,
    departures: Box<[TimeOfDay]>,
    states: Box<[Arc<str>]>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Streams the record source through the column normalizer.
    /// Depending on the size of the data this can be a long blocking function.
    pub fn load_source(self, source: SourceReader) -> Result<Self, source::Error> {
        debug!("Loading trips...");
        let now = Instant::now();
        let mut trips: Vec<Trip> = Vec::new();
        source.stream_trips(|(i, raw)| {
            trips.push(normalize::trip_from_source(i as u32, raw));
        })?;
        debug!("Loading trips took {:?}", now.elapsed());
        Ok(Self::from_trips(trips))
    }

    /// Builds the table and its option catalogues from already-normalized
    /// rows.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        debug!("Building option catalogues...");
        let now = Instant::now();

        let route_names = unique_strings(trips.iter().filter_map(|trip| trip.route_name.clone()));
        let bus_types = unique_strings(trips.iter().filter_map(|trip| trip.bus_type.clone()));
        let states = unique_strings(trips.iter().filter_map(|trip| trip.state.clone()));

        let mut departures: Vec<TimeOfDay> =
            trips.iter().filter_map(|trip| trip.departure).collect();
        departures.par_sort_unstable();
        departures.dedup();

        debug!("Building option catalogues took {:?}", now.elapsed());
        Self {
            trips: trips.into(),
            route_names,
            bus_types,
            departures: departures.into(),
            states,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Every distinct route label, sorted.
    pub fn route_names(&self) -> &[Arc<str>] {
        &self.route_names
    }

    /// Every distinct coach description, sorted.
    pub fn bus_types(&self) -> &[Arc<str>] {
        &self.bus_types
    }

    /// Every distinct departure time, ascending.
    pub fn departures(&self) -> &[TimeOfDay] {
        &self.departures
    }

    /// Every distinct operating state, sorted. Empty when the source table
    /// has no state column.
    pub fn states(&self) -> &[Arc<str>] {
        &self.states
    }

    /// Runs the composed criteria over the table and projects the result.
    pub fn select(&self, criteria: &Criteria) -> Outcome {
        query::project(self, criteria)
    }
}

fn unique_strings<I>(values: I) -> Box<[Arc<str>]>
where
    I: Iterator<Item = Arc<str>>,
{
    let mut values: Vec<Arc<str>> = values.collect();
    values.par_sort_unstable();
    values.dedup();
    values.into()
}
