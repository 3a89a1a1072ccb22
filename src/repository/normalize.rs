use std::sync::Arc;

use chrono::{NaiveTime, Timelike};

use crate::{
    repository::{AcType, BusTypeCategory, Trip},
    shared::time::TimeOfDay,
    source::models::SourceTrip,
};

/// Literal separator between the two halves of a route label.
pub const ROUTE_SEPARATOR: &str = " to ";

/// Keyword phrases per coach category, checked in order; the first category
/// with a matching phrase wins and no match means `Other`. Ordered most
/// specific first so "semi sleeper" is not swallowed by the plain "sleeper"
/// phrase.
const CATEGORY_KEYWORDS: &[(BusTypeCategory, &[&str])] = &[
    (BusTypeCategory::Seater, &["seater"]),
    (
        BusTypeCategory::SemiSleeper,
        &["semi sleeper", "semi-sleeper"],
    ),
    (BusTypeCategory::Sleeper, &["sleeper"]),
];

/// Builds one normalized trip out of a raw source row. Derivations that
/// cannot be carried out leave `None` behind instead of failing the row.
pub(crate) fn trip_from_source(index: u32, raw: SourceTrip) -> Trip {
    let (start_place, reach_place) = match raw.route_name.as_deref().and_then(split_route) {
        Some((start, reach)) => (Some(Arc::from(start)), Some(Arc::from(reach))),
        None => (None, None),
    };

    Trip {
        index,
        route_name: raw.route_name.map(Arc::from),
        start_place,
        reach_place,
        bus_type: raw.bus_type.map(Arc::from),
        departure: raw.departure.as_deref().and_then(format_time),
        arrival: raw.reach.as_deref().and_then(format_time),
        star_rating: raw.star_ratings,
        price: raw.price,
        seat_availability: raw.seat_availability,
        state: raw.state.map(Arc::from),
    }
}

/// Parses a raw time cell. An all-digit value is a duration in seconds since
/// midnight; anything else must read as a clock string. Malformed cells
/// yield `None`.
pub fn format_time(raw: &str) -> Option<TimeOfDay> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.bytes().all(|byte| byte.is_ascii_digit()) {
        let seconds: u32 = raw.parse().ok()?;
        return TimeOfDay::from_seconds(seconds);
    }
    if let Some(time) = TimeOfDay::from_hms(raw) {
        return Some(time);
    }
    // Some exports drop the seconds component ("6:30").
    let time = NaiveTime::parse_from_str(raw, "%H:%M").ok()?;
    TimeOfDay::from_seconds(time.num_seconds_from_midnight())
}

/// Splits a route label on `" to "`. Exactly one separator is required;
/// labels without it, or with a nested one, carry no derived places.
pub fn split_route(route: &str) -> Option<(&str, &str)> {
    let mut parts = route.split(ROUTE_SEPARATOR);
    let start = parts.next()?;
    let reach = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((start, reach))
}

/// A coach is air-conditioned iff its description mentions "A/C".
pub fn classify_ac(bus_type: &str) -> AcType {
    if bus_type.to_lowercase().contains("a/c") {
        AcType::Ac
    } else {
        AcType::NonAc
    }
}

pub fn categorize(bus_type: &str) -> BusTypeCategory {
    let haystack = bus_type.to_lowercase();
    for (category, phrases) in CATEGORY_KEYWORDS {
        if phrases.iter().any(|phrase| haystack.contains(phrase)) {
            return *category;
        }
    }
    BusTypeCategory::Other
}
