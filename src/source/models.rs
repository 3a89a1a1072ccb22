use serde::{Deserialize, Deserializer, Serialize};

/// One raw row of the trip table, exactly as the record source hands it
/// over. Numeric fields deserialize leniently: a malformed cell becomes
/// `None` instead of failing the row.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SourceTrip {
    #[serde(rename = "Route_Name", default)]
    pub route_name: Option<String>,
    #[serde(rename = "Bus_Type", default)]
    pub bus_type: Option<String>,
    #[serde(rename = "Departure", default)]
    pub departure: Option<String>,
    #[serde(rename = "Reach", alias = "Arrival", default)]
    pub reach: Option<String>,
    #[serde(rename = "Star_Ratings", deserialize_with = "lenient_f64", default)]
    pub star_ratings: Option<f64>,
    #[serde(rename = "Price", deserialize_with = "lenient_f64", default)]
    pub price: Option<f64>,
    #[serde(
        rename = "Seat_Availability",
        deserialize_with = "lenient_u32",
        default
    )]
    pub seat_availability: Option<u32>,
    #[serde(default)]
    pub state: Option<String>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}
