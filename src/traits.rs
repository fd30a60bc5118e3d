//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Records};

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// in *OLS* the concept is the set of coefficients and the intercept minimising the squared
/// residuals of the training data.
///
/// The hyperparameters are stored in the implementing type, the learned concept is returned
/// as `Self::Object`.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}

/// Predict with a fitted model and write the result into an existing target buffer
///
/// Algorithms implement this trait, the [`Predict`] impls for arrays and datasets are derived
/// from it.
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace<'a>(&'a self, x: &'a R, y: &mut T);

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with a fitted model
///
/// This trait assumes the `PredictInplace` implementation and provides the allocation of the
/// targets.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}
