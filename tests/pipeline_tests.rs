use std::{fs, io::Write, path::PathBuf};

use busboard::prelude::*;
use busboard::source::Error;

const HEADER: &str = "Route_Name,Bus_Type,Departure,Reach,Star_Ratings,Price,Seat_Availability";

fn write_csv(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_zip(name: &str, entry: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let file = fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(entry, zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(content.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

fn load_csv(path: PathBuf) -> Result<Repository, Error> {
    let result = Repository::new().load_source(SourceReader::new(Config::default()).from_csv(path.clone()));
    let _ = fs::remove_file(path);
    result
}

#[test]
fn raw_row_normalizes_end_to_end() {
    let content = format!(
        "{HEADER}\nChennai to Bangalore,A/C Sleeper (2+1),23400,09:45:00,4.5,950,12\n"
    );
    let path = write_csv("busboard_normalize.csv", &content);
    let repository = load_csv(path).unwrap();

    assert_eq!(repository.len(), 1);
    let trip = &repository.trips[0];
    assert_eq!(trip.route_name.as_deref(), Some("Chennai to Bangalore"));
    assert_eq!(trip.start_place.as_deref(), Some("Chennai"));
    assert_eq!(trip.reach_place.as_deref(), Some("Bangalore"));
    assert_eq!(trip.ac_type(), Some(AcType::Ac));
    assert_eq!(trip.departure.unwrap().to_hms_string(), "06:30:00");
    assert_eq!(trip.arrival.unwrap().to_hms_string(), "09:45:00");
    assert_eq!(trip.star_rating, Some(4.5));
    assert_eq!(trip.price, Some(950.0));
    assert_eq!(trip.seat_availability, Some(12));
}

#[test]
fn combined_filters_retain_then_exclude() {
    let content = format!(
        "{HEADER}\n\
         Chennai to Bangalore,A/C Sleeper (2+1),23400,09:45:00,4.5,950,12\n\
         Hyderabad to Vijayawada,Sleeper (2+1),79200,02:30:00,3.5,1200,5\n"
    );
    let path = write_csv("busboard_filters.csv", &content);
    let repository = load_csv(path).unwrap();

    let mut criteria = Criteria {
        route: Some("Chennai to Bangalore".into()),
        price_bands: vec![PriceBand::from_label("₹500 - ₹1000").unwrap()],
        rating: RatingFilter::AtLeast(vec![4.0]),
        ..Default::default()
    };
    let outcome = repository.select(&criteria);
    assert_eq!(outcome.rows().len(), 1);
    assert_eq!(
        outcome.rows()[0].route_name.as_deref(),
        Some("Chennai to Bangalore")
    );

    criteria.ac_types = vec![AcType::NonAc];
    assert_eq!(repository.select(&criteria), Outcome::NoMatch);
}

#[test]
fn route_without_separator_keeps_both_places_empty() {
    let content = format!("{HEADER}\nCityLoop,Seater (2+2),21600,08:00:00,3.0,300,20\n");
    let path = write_csv("busboard_no_separator.csv", &content);
    let repository = load_csv(path).unwrap();

    let trip = &repository.trips[0];
    assert_eq!(trip.route_name.as_deref(), Some("CityLoop"));
    assert!(trip.start_place.is_none());
    assert!(trip.reach_place.is_none());
}

#[test]
fn malformed_cells_degrade_to_none() {
    let content = format!("{HEADER}\nChennai to Bangalore,Seater (2+2),banana,09:45:00,oops,abc,12\n");
    let path = write_csv("busboard_malformed.csv", &content);
    let repository = load_csv(path).unwrap();

    assert_eq!(repository.len(), 1);
    let trip = &repository.trips[0];
    assert!(trip.departure.is_none());
    assert!(trip.star_rating.is_none());
    assert!(trip.price.is_none());
    assert_eq!(trip.seat_availability, Some(12));
}

#[test]
fn missing_required_column_is_named() {
    let content = "Route_Name,Bus_Type,Departure,Reach,Star_Ratings,Seat_Availability\n\
                   Chennai to Bangalore,Seater (2+2),23400,09:45:00,4.5,12\n";
    let path = write_csv("busboard_missing_price.csv", content);
    let err = load_csv(path).unwrap_err();
    assert!(matches!(err, Error::MissingColumn(name) if name == "Price"));
}

#[test]
fn renamed_arrival_column_is_accepted() {
    let content = "Route_Name,Bus_Type,Departure,Arrival,Star_Ratings,Price,Seat_Availability\n\
                   Chennai to Bangalore,Seater (2+2),23400,09:45:00,4.5,950,12\n";
    let path = write_csv("busboard_arrival.csv", content);
    let repository = load_csv(path).unwrap();
    assert_eq!(
        repository.trips[0].arrival.unwrap().to_hms_string(),
        "09:45:00"
    );
}

#[test]
fn optional_state_column_feeds_the_catalogue() {
    let content = "Route_Name,Bus_Type,Departure,Reach,Star_Ratings,Price,Seat_Availability,state\n\
                   Chennai to Bangalore,Seater (2+2),23400,09:45:00,4.5,950,12,Tamil Nadu\n";
    let path = write_csv("busboard_state.csv", content);
    let repository = load_csv(path).unwrap();
    assert_eq!(repository.trips[0].state.as_deref(), Some("Tamil Nadu"));
    assert_eq!(repository.states().len(), 1);
}

#[test]
fn empty_table_is_no_data_not_no_match() {
    let content = format!("{HEADER}\n");
    let path = write_csv("busboard_empty.csv", &content);
    let repository = load_csv(path).unwrap();

    assert!(repository.is_empty());
    assert_eq!(repository.select(&Criteria::default()), Outcome::NoData);
}

#[test]
fn unreachable_source_reports_and_stays_empty() {
    let path = std::env::temp_dir().join("busboard_does_not_exist.csv");
    let reader = SourceReader::new(Config::default()).from_csv(path);
    let err = Repository::new().load_source(reader).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn zip_archive_streams_the_named_entry() {
    let content = format!(
        "{HEADER}\nChennai to Bangalore,A/C Sleeper (2+1),23400,09:45:00,4.5,950,12\n"
    );
    let path = write_zip("busboard_archive.zip", "bus_detail.csv", &content);
    let reader = SourceReader::new(Config::default()).from_zip(path.clone());
    let repository = Repository::new().load_source(reader).unwrap();
    let _ = fs::remove_file(path);

    assert_eq!(repository.len(), 1);
    assert_eq!(
        repository.trips[0].start_place.as_deref(),
        Some("Chennai")
    );
}

#[test]
fn zip_archive_without_the_entry_is_reported() {
    let content = format!("{HEADER}\n");
    let path = write_zip("busboard_wrong_entry.zip", "other.csv", &content);
    let reader = SourceReader::new(Config::default()).from_zip(path.clone());
    let err = Repository::new().load_source(reader).unwrap_err();
    let _ = fs::remove_file(path);
    assert!(matches!(err, Error::FileNotFound(name) if name == "bus_detail.csv"));
}
