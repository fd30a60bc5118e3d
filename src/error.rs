//! Error types in linreg
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error("the number of samples do not match: {0} - {1}")]
    MismatchedShapes(usize, usize),
    #[error("feature index {index} out of range, dataset has {nfeatures} features")]
    FeatureOutOfRange { index: usize, nfeatures: usize },
    #[error("cannot hold out {ntest} samples from a dataset of {nsamples}")]
    SplitOutOfRange { ntest: usize, nsamples: usize },
}
