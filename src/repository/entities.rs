use std::{fmt, sync::Arc};

use crate::{repository::normalize, shared::time::TimeOfDay};

/// One normalized trip row. Fields that could not be derived or parsed from
/// the raw table stay `None`; filtering treats them as non-matching.
#[derive(Debug, Default, Clone)]
pub struct Trip {
    /// The global internal index of this row in the repository.
    pub index: u32,
    /// Full route label, `"<origin> to <destination>"`.
    pub route_name: Option<Arc<str>>,
    /// Origin half of the route label. Set together with `reach_place`, and
    /// only when the label contains the separator exactly once.
    pub start_place: Option<Arc<str>>,
    pub reach_place: Option<Arc<str>>,
    /// Free-text coach description (e.g. "A/C Sleeper (2+1)").
    pub bus_type: Option<Arc<str>>,
    pub departure: Option<TimeOfDay>,
    pub arrival: Option<TimeOfDay>,
    /// 1.0 to 5.0 in half-point steps.
    pub star_rating: Option<f64>,
    pub price: Option<f64>,
    pub seat_availability: Option<u32>,
    /// Operating state, when the source table carries it.
    pub state: Option<Arc<str>>,
}

impl Trip {
    /// Air-conditioning class, derived from `bus_type` on demand so the two
    /// can never disagree.
    pub fn ac_type(&self) -> Option<AcType> {
        self.bus_type.as_deref().map(normalize::classify_ac)
    }

    /// Coach category, derived from `bus_type` on demand. Scratch state for
    /// filtering; the projected view never carries it.
    pub fn category(&self) -> Option<BusTypeCategory> {
        self.bus_type.as_deref().map(normalize::categorize)
    }

    pub fn departure_hour(&self) -> Option<u32> {
        self.departure.map(|time| time.hour())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcType {
    Ac,
    NonAc,
}

impl AcType {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::NonAc => "Non-AC",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "AC" => Some(Self::Ac),
            "Non-AC" => Some(Self::NonAc),
            _ => None,
        }
    }
}

impl fmt::Display for AcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusTypeCategory {
    Seater,
    SemiSleeper,
    Sleeper,
    Other,
}

impl BusTypeCategory {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Seater => "Seater",
            Self::SemiSleeper => "Semi Sleeper",
            Self::Sleeper => "Sleeper",
            Self::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Seater" => Some(Self::Seater),
            "Semi Sleeper" => Some(Self::SemiSleeper),
            "Sleeper" => Some(Self::Sleeper),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for BusTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
