/// A named inclusive price interval. Adjacent bands share their boundary
/// value: a fare of exactly 500 belongs to both "Below ₹500" and
/// "₹500 - ₹1000".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub label: &'static str,
    pub min: f64,
    /// `None` leaves the band open-ended upward.
    pub max: Option<f64>,
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        PRICE_BANDS.iter().find(|band| band.label == label).copied()
    }
}

pub const PRICE_BANDS: &[PriceBand] = &[
    PriceBand {
        label: "Below ₹500",
        min: 0.0,
        max: Some(500.0),
    },
    PriceBand {
        label: "₹500 - ₹1000",
        min: 500.0,
        max: Some(1000.0),
    },
    PriceBand {
        label: "₹1000 - ₹1500",
        min: 1000.0,
        max: Some(1500.0),
    },
    PriceBand {
        label: "Above ₹1500",
        min: 1500.0,
        max: None,
    },
];

/// A named half-open seat-count interval `[min, max)`; bands never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatBand {
    pub label: &'static str,
    pub min: u32,
    pub max: Option<u32>,
}

impl SeatBand {
    pub fn contains(&self, seats: u32) -> bool {
        seats >= self.min && self.max.is_none_or(|max| seats < max)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        SEAT_BANDS.iter().find(|band| band.label == label).copied()
    }
}

pub const SEAT_BANDS: &[SeatBand] = &[
    SeatBand {
        label: "0 - 9",
        min: 0,
        max: Some(10),
    },
    SeatBand {
        label: "10 - 19",
        min: 10,
        max: Some(20),
    },
    SeatBand {
        label: "20 - 29",
        min: 20,
        max: Some(30),
    },
    SeatBand {
        label: "30+",
        min: 30,
        max: None,
    },
];

/// A named departure-hour window `[start, end)`. A window whose start hour
/// exceeds its end wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub label: &'static str,
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start > self.end {
            hour >= self.start || hour < self.end
        } else {
            hour >= self.start && hour < self.end
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        HOUR_WINDOWS
            .iter()
            .find(|window| window.label == label)
            .copied()
    }
}

pub const HOUR_WINDOWS: &[HourWindow] = &[
    HourWindow {
        label: "Night (00 - 06)",
        start: 0,
        end: 6,
    },
    HourWindow {
        label: "Morning (06 - 12)",
        start: 6,
        end: 12,
    },
    HourWindow {
        label: "Afternoon (12 - 18)",
        start: 12,
        end: 18,
    },
    HourWindow {
        label: "Evening (18 - 24)",
        start: 18,
        end: 24,
    },
];

/// Legacy star-rating floors; several chosen floors are unioned.
pub const RATING_FLOORS: &[(&str, f64)] = &[("Above 2*", 2.0), ("Above 3*", 3.0), ("Above 4*", 4.0)];

pub fn rating_floor(label: &str) -> Option<f64> {
    RATING_FLOORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, floor)| *floor)
}

#[test]
fn price_boundary_sits_in_both_bands() {
    assert!(PriceBand::from_label("Below ₹500").unwrap().contains(500.0));
    assert!(
        PriceBand::from_label("₹500 - ₹1000")
            .unwrap()
            .contains(500.0)
    );
}

#[test]
fn price_open_end_is_unbounded() {
    assert!(
        PriceBand::from_label("Above ₹1500")
            .unwrap()
            .contains(99_999.0)
    );
}

#[test]
fn seat_bands_do_not_overlap() {
    for seats in 0..60 {
        let hits = SEAT_BANDS
            .iter()
            .filter(|band| band.contains(seats))
            .count();
        assert_eq!(hits, 1, "{seats} seats matched {hits} bands");
    }
}

#[test]
fn hour_window_half_open_end() {
    let morning = HourWindow::from_label("Morning (06 - 12)").unwrap();
    assert!(morning.contains(6));
    assert!(!morning.contains(12));
}

#[test]
fn hour_window_wraps_past_midnight() {
    let window = HourWindow {
        label: "late",
        start: 22,
        end: 4,
    };
    assert!(window.contains(23));
    assert!(window.contains(2));
    assert!(!window.contains(12));
}

#[test]
fn rating_floor_lookup() {
    assert_eq!(rating_floor("Above 3*"), Some(3.0));
    assert_eq!(rating_floor("Above 6*"), None);
}
