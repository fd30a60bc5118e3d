//!
//! `linreg-ols` provides a pure Rust implementation of ordinary least squares regression.
//!
//! ## The Big Picture
//!
//! `linreg-ols` is a crate in the `linreg` workspace. It implements the [`Fit`] and
//! [`PredictInplace`] traits of the core crate, so a fitted model can be evaluated with the
//! regression metrics found there.
//!
//! [`Fit`]: linreg::traits::Fit
//! [`PredictInplace`]: linreg::traits::PredictInplace
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ LINREG_DATA_DIR=datasets/data cargo run --example diabetes
//! ```

mod error;
mod ols;

pub use error::*;
pub use ols::*;
