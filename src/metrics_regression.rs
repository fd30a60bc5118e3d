//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables.

use crate::dataset::{AsSingleTargets, Float};
use crate::error::{Error, Result};
use ndarray::ArrayView1;
use std::cmp::Ordering;
use std::ops::Sub;

/// Regression metrices trait for single targets.
///
/// It is possible to compute the listed metrics between:
/// * One-dimensional array - One-dimensional array
/// * One-dimensional array - dataset
///
/// Both sides must have the same, non-zero, number of samples. Otherwise the metric fails with
/// `Error::MismatchedShapes` or `Error::NotEnoughSamples`.
///
/// To evaluate a prediction call the metric on the prediction with the ground truth as
/// argument:
/// ```
/// use linreg::prelude::*;
/// use ndarray::array;
///
/// let prediction = array![1., 2., 3.];
/// let ground_truth = array![1., 2., 5.];
///
/// assert_eq!(prediction.mean_squared_error(&ground_truth).unwrap(), 4. / 3.);
/// ```
pub trait SingleTargetRegression<F: Float, T: AsSingleTargets<Elem = F>>:
    AsSingleTargets<Elem = F>
{
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        Ok(y_hat
            .sub(&y)
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    /// Mean error between two continuous variables
    fn mean_absolute_error(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        y_hat
            .sub(&y)
            .mapv(|x| x.abs())
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        y_hat
            .sub(&y)
            .mapv(|x| x * x)
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    /// Median absolute error between two continuous variables
    fn median_absolute_error(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        let mut abs_error = y_hat.sub(&y).mapv(|x| x.abs()).to_vec();
        abs_error.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mid = abs_error.len() / 2;
        if abs_error.len() % 2 == 0 {
            Ok((abs_error[mid - 1] + abs_error[mid]) / F::cast(2.0))
        } else {
            Ok(abs_error[mid])
        }
    }

    /// R squared coefficient, is the proportion of the variance in the dependent variable that
    /// is predictable from the independent variable.
    ///
    /// The total sum of squares is taken around the mean of `compare_to`, the ground truth. A
    /// constant ground truth scores `1` when predicted exactly and `0` otherwise.
    fn r2(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        let mean = y.mean().ok_or(Error::NotEnoughSamples)?;
        let ss_res = y_hat.sub(&y).mapv(|x| x * x).sum();
        let ss_tot = y.mapv(|x| (x - mean) * (x - mean)).sum();

        Ok(goodness_of_fit(ss_res, ss_tot))
    }

    /// Same as R-Squared but with the residual variance instead of the residual sum of squares,
    /// a constant offset between prediction and ground truth is not penalised
    fn explained_variance(&self, compare_to: &T) -> Result<F> {
        let (y_hat, y) = paired(self, compare_to)?;

        let diff = y.sub(&y_hat);
        let mean = y.mean().ok_or(Error::NotEnoughSamples)?;
        let mean_error = diff.mean().ok_or(Error::NotEnoughSamples)?;

        let var_res = diff.mapv(|x| (x - mean_error) * (x - mean_error)).sum();
        let var_tot = y.mapv(|x| (x - mean) * (x - mean)).sum();

        Ok(goodness_of_fit(var_res, var_tot))
    }
}

impl<F: Float, T: AsSingleTargets<Elem = F>, T2: AsSingleTargets<Elem = F>>
    SingleTargetRegression<F, T2> for T
{
}

/// Views on prediction and ground truth, checked for equal and non-zero length
fn paired<'a, F, A, B>(
    prediction: &'a A,
    truth: &'a B,
) -> Result<(ArrayView1<'a, F>, ArrayView1<'a, F>)>
where
    F: Float,
    A: AsSingleTargets<Elem = F> + ?Sized,
    B: AsSingleTargets<Elem = F>,
{
    let (y_hat, y) = (prediction.as_single_targets(), truth.as_single_targets());

    if y_hat.len() != y.len() {
        return Err(Error::MismatchedShapes(y_hat.len(), y.len()));
    }
    if y.is_empty() {
        return Err(Error::NotEnoughSamples);
    }

    Ok((y_hat, y))
}

// 1 - residual / total, with the degenerate case of a constant ground truth
fn goodness_of_fit<F: Float>(residual: F, total: F) -> F {
    if total == F::zero() {
        if residual == F::zero() {
            F::one()
        } else {
            F::zero()
        }
    } else {
        F::one() - residual / total
    }
}

#[cfg(test)]
mod tests {
    use super::SingleTargetRegression;
    use crate::dataset::DatasetBase;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_same() {
        let a: Array1<f32> = Array1::ones(100);

        assert_abs_diff_eq!(a.max_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.mean_absolute_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.median_absolute_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.explained_variance(&a).unwrap(), 1.0f32);
    }

    #[test]
    fn mean_squared_error_of_equal_values_is_zero() {
        let a = array![3.5, 3.5, 3.5, 3.5];
        let b = array![-1.25, 0.0, 7.0, 151.0];

        assert_eq!(a.mean_squared_error(&a).unwrap(), 0.0);
        assert_eq!(b.mean_squared_error(&b).unwrap(), 0.0);
    }

    #[test]
    fn r2_of_exact_prediction_is_one() {
        let a = array![3.5, 3.5, 3.5, 3.5];
        let b = array![-1.25, 0.0, 7.0, 151.0];

        assert_eq!(a.r2(&a).unwrap(), 1.0);
        assert_eq!(b.r2(&b).unwrap(), 1.0);
    }

    #[test]
    fn r2_of_mean_prediction_is_zero() {
        let truth = array![1., 2., 3., 4.];
        let prediction = array![2.5, 2.5, 2.5, 2.5];

        assert_abs_diff_eq!(prediction.r2(&truth).unwrap(), 0.0);
        // constant ground truth which is not hit exactly
        assert_abs_diff_eq!(truth.r2(&prediction).unwrap(), 0.0);
    }

    #[test]
    fn test_max_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.max_error(&b).unwrap(), 0.3f64, epsilon = 1e-5);
    }

    #[test]
    fn test_median_absolute_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        // even length array
        let b = array![0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
        // shuffled b
        let c = array![0.0, 0.2, 0.4, 0.3, 0.1, 0.5];

        assert_abs_diff_eq!(
            a.median_absolute_error(&a.mapv(|x| x * 2.)).unwrap(),
            0.2,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            b.median_absolute_error(&b.mapv(|x| x * 2.)).unwrap(),
            0.25,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(c.median_absolute_error(&b).unwrap(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_absolute_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.mean_absolute_error(&b).unwrap(), 0.16, epsilon = 1e-5);
    }

    #[test]
    fn test_mean_squared_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.mean_squared_error(&b).unwrap(), 0.036, epsilon = 1e-5);
    }

    #[test]
    fn test_r2() {
        let prediction = array![0.1, 0.3, 0.2, 0.5, 0.7];
        let truth = array![0.0, 0.1, 0.2, 0.3, 0.4];

        // 1 - 0.18 / 0.1
        assert_abs_diff_eq!(prediction.r2(&truth).unwrap(), -0.8, epsilon = 1e-5);
    }

    #[test]
    fn test_explained_variance() {
        let truth = array![1., 2., 3., 4.];
        // constant offset is not penalised
        let prediction = array![2., 3., 4., 5.];

        assert_abs_diff_eq!(prediction.explained_variance(&truth).unwrap(), 1.0);
        assert!(prediction.r2(&truth).unwrap() < 1.0);
    }

    #[test]
    fn compare_with_dataset() {
        let dataset = DatasetBase::new(array![[0.], [1.], [2.]], array![1., 2., 3.]);
        let prediction = array![1., 2., 4.];

        assert_abs_diff_eq!(prediction.mean_squared_error(&dataset).unwrap(), 1. / 3.);
    }

    #[test]
    fn mismatched_and_empty_inputs() {
        let a = array![1., 2.];
        let b = array![1., 2., 3.];
        let empty: Array1<f64> = Array1::zeros(0);

        assert_eq!(
            a.mean_squared_error(&b).err(),
            Some(Error::MismatchedShapes(2, 3))
        );
        assert_eq!(empty.r2(&empty).err(), Some(Error::NotEnoughSamples));
    }
}
