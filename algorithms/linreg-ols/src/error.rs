//! An error when fitting a linear model
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting a linear model
#[derive(Error, Debug)]
pub enum LinearError {
    #[error("At least one sample needed")]
    NotEnoughSamples,
    #[error("design matrix is singular or ill-conditioned, the solution is not finite")]
    IllConditioned,
    #[error(transparent)]
    BaseCrate(#[from] linreg::Error),
    #[error(transparent)]
    LinalgError(#[from] linfa_linalg::LinalgError),
}
