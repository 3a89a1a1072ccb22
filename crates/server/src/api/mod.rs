mod data;
mod options;
mod trips;

pub use data::*;
pub use options::*;
pub use trips::*;

use crate::state::AppState;
use busboard::prelude::*;
use tracing::error;

/// Opens the configured dataset and runs one load-and-normalize pass.
/// Failures are reported and yield an empty table, which projects as the
/// "no data" state.
pub(crate) fn load_repository(state: &AppState) -> Repository {
    match Repository::new().load_source(source_reader(state)) {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load trip data: {err}");
            Repository::new()
        }
    }
}

pub(crate) fn source_reader(state: &AppState) -> SourceReader {
    let reader = SourceReader::new(Config::default());
    if state.data_path.extension().is_some_and(|ext| ext == "zip") {
        reader.from_zip(state.data_path.clone())
    } else {
        reader.from_csv(state.data_path.clone())
    }
}
