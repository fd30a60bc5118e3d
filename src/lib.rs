//! `linreg` provides the building blocks for fitting and evaluating least squares models
//! on small tabular datasets.
//!
//! ## Contents
//!
//! * [`DatasetBase`](dataset::DatasetBase): records and aligned targets, with feature
//!   selection and train/test splitting
//! * [`Fit`](traits::Fit), [`Predict`](traits::Predict) and
//!   [`PredictInplace`](traits::PredictInplace): the seams algorithm crates implement
//! * [`SingleTargetRegression`](metrics::SingleTargetRegression): mean squared error,
//!   coefficient of determination and related metrics
//!
//! The algorithms themselves live in their own crates under `algorithms/`, the datasets
//! in `linreg-datasets`.
//!
//! ```
//! use linreg::prelude::*;
//! use ndarray::array;
//!
//! let dataset = Dataset::new(array![[1., 0.], [2., 1.], [3., 0.]], array![1., 2., 3.]);
//! let (train, test) = dataset.split_tail(1).unwrap();
//!
//! assert_eq!(train.nsamples(), 2);
//! assert_eq!(test.nsamples(), 1);
//! ```

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float};
pub use error::{Error, Result};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::SingleTargetRegression;
}
