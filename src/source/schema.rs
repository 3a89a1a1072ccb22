use csv::StringRecord;

use crate::source::Error;

/// Columns the normalizer cannot work without.
pub const REQUIRED_COLUMNS: &[&str] = &["Departure", "Price", "Star_Ratings", "Seat_Availability"];

/// Columns that unlock extra derivations when present.
pub const OPTIONAL_COLUMNS: &[&str] = &["Route_Name", "Bus_Type", "state"];

/// The arrival column is accepted under its raw name or its renamed form.
pub const ARRIVAL_COLUMNS: &[&str] = &["Reach", "Arrival"];

/// Checks the header row against the declared schema, naming the first
/// missing required column instead of silently skipping derivations.
pub fn validate(headers: &StringRecord) -> Result<(), Error> {
    let has = |name: &str| headers.iter().any(|header| header == name);
    for column in REQUIRED_COLUMNS {
        if !has(column) {
            return Err(Error::MissingColumn((*column).to_string()));
        }
    }
    if !ARRIVAL_COLUMNS.iter().any(|column| has(column)) {
        return Err(Error::MissingColumn("Reach".to_string()));
    }
    Ok(())
}
