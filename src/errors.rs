use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open dataset {}: {source}", .path.display())]
    DatasetUnavailable { path: PathBuf, source: io::Error },

    #[error("dataset header is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed record on line {line}: '{field}' value '{value}' is not numeric")]
    MalformedRecord {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("cannot average an empty movie list for director '{0}'")]
    EmptyGroup(String),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write ranking report: {0}")]
    Io(#[from] io::Error),
}
