use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// An error when loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset file {0} not found")]
    MissingFile(PathBuf),
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] ndarray_csv::ReadError),
    #[error("target file {0} has no columns")]
    EmptyTargets(PathBuf),
    #[error(transparent)]
    BaseCrate(#[from] linreg::Error),
}
