pub struct Config {
    pub trips_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trips_file_name: "bus_detail.csv".into(),
        }
    }
}
