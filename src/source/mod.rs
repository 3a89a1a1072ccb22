use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use zip::ZipArchive;

mod config;
pub mod models;
mod schema;
pub use config::*;
pub use schema::*;

use models::SourceTrip;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Expected column {0} is missing from the source table")]
    MissingColumn(String),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Csv(PathBuf),
    Zip(PathBuf),
}

/// The record-source boundary: an opaque tabular input streamed row by row.
#[derive(Default)]
pub struct SourceReader {
    config: Config,
    storage: StorageType,
}

impl SourceReader {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_csv(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Csv(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    /// Streams raw trip rows out of the configured storage. The underlying
    /// file handle lives only for the duration of the call and is released
    /// on every exit path.
    pub fn stream_trips<F>(&self, f: F) -> Result<(), Error>
    where
        F: FnMut((usize, SourceTrip)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Csv(path) => {
                let file = File::open(path)?;
                stream_rows(file, f)
            }
            StorageType::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let index = archive
                    .index_for_name(&self.config.trips_file_name)
                    .ok_or_else(|| Error::FileNotFound(self.config.trips_file_name.clone()))?;
                let file = archive.by_index(index)?;
                stream_rows(file, f)
            }
        }
    }
}

fn stream_rows<T, R, F>(reader: R, f: F) -> Result<(), Error>
where
    T: DeserializeOwned,
    R: Read,
    F: FnMut((usize, T)),
{
    let mut reader = csv::Reader::from_reader(reader);
    schema::validate(reader.headers()?)?;
    reader
        .deserialize()
        .filter_map(|row| row.ok())
        .enumerate()
        .for_each(f);
    Ok(())
}
