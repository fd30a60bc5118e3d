//! `linreg-datasets` loads the datasets used by the `linreg` examples and tests.
//!
//! ## Current State
//!
//! * [`diabetes_bundled`]: the diabetes dataset (442 patients, 10 baseline variables, disease
//!   progression one year later as target), embedded with the `diabetes` feature (on by
//!   default)
//! * [`diabetes`]: the same dataset read from a directory at runtime
//! * [`generate`]: synthetic linear data for tests and benchmarks
//!
//! along with the CSV readers they are built on. Loaded datasets are returned as a
//! [`linreg::Dataset`] with named features.
//!
//! ## Using a dataset
//!
//! ```
//! let dataset = linreg_datasets::diabetes_bundled().unwrap();
//! let bmi = dataset.select_feature(2).unwrap();
//! let (train, test) = bmi.split_tail(20).unwrap();
//!
//! assert_eq!((train.records().nrows(), test.records().nrows()), (422, 20));
//! ```

mod dataset;
mod error;
pub mod generate;

pub use dataset::*;
pub use error::{DatasetError, Result};
