use std::path::PathBuf;

/// Per-process configuration. Nothing request-scoped lives here: every
/// request loads, filters, and drops its own table.
pub struct AppState {
    pub data_path: PathBuf,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }
}
