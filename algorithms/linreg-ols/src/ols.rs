//! Ordinary Least Squares
#![allow(non_snake_case)]
use crate::error::{LinearError, Result};
use linfa_linalg::qr::LeastSquaresQrInto;
use linreg::dataset::{AsSingleTargets, DatasetBase};
use linreg::traits::{Fit, PredictInplace};
use linreg::Float;
use log::debug;
use ndarray::{s, Array1, Array2, ArrayBase, Axis, Data, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
/// An ordinary least squares linear regression model.
///
/// LinearRegression fits a linear model to minimize the residual sum of
/// squares between the observed targets in the dataset, and the targets
/// predicted by the linear approximation.
///
/// Ordinary least squares regression solves the overconstrainted model
///
/// y = Ax + b
///
/// by finding x and b which minimize the L_2 norm ||y - Ax - b||_2.
///
/// The problem is solved in closed form with a QR decomposition of the
/// design matrix, there are no iterations or convergence criteria.
///
/// ## Examples
///
/// Here's an example on how to train a linear regression model on a single feature
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use linreg::prelude::*;
/// use linreg_ols::LinearRegression;
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![[0f64], [1.], [2.]], array![1f64, 3., 5.]);
/// let model = LinearRegression::default().fit(&dataset).unwrap();
/// let pred = model.predict(&dataset);
///
/// assert_abs_diff_eq!(model.params()[0], 2., epsilon = 1e-10);
/// assert_abs_diff_eq!(pred.r2(&dataset).unwrap(), 1., epsilon = 1e-10);
/// ```
pub struct LinearRegression {
    fit_intercept: bool,
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
/// A fitted linear regression model which can be used for making predictions.
pub struct FittedLinearRegression<F> {
    intercept: F,
    params: Array1<F>,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression::new()
    }
}

/// Configure and fit a linear regression model
impl LinearRegression {
    /// Create a default linear regression model.
    /// By default, an intercept will be fitted.
    pub fn new() -> LinearRegression {
        LinearRegression {
            fit_intercept: true,
        }
    }

    /// Configure the linear regression model to fit an intercept.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.fit_intercept = intercept;
        self
    }

    /// Whether an intercept is fitted
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

impl<F: Float, D: Data<Elem = F>, T: AsSingleTargets<Elem = F>>
    Fit<ArrayBase<D, Ix2>, T, LinearError> for LinearRegression
{
    type Object = FittedLinearRegression<F>;

    /// Fit a linear regression model given a feature matrix `X` and a target
    /// variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The target variable `y` must have shape `(n_samples)`
    ///
    /// Returns a `FittedLinearRegression` object which contains the fitted
    /// parameters and can be used to `predict` values of the target variable
    /// for new feature values.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let X = dataset.records();
        let y = dataset.as_single_targets();

        let (n_samples, n_features) = X.dim();
        if n_samples == 0 {
            return Err(LinearError::NotEnoughSamples);
        }
        if y.len() != n_samples {
            return Err(linreg::Error::MismatchedShapes(n_samples, y.len()).into());
        }

        let fitted = if self.fit_intercept {
            // append a column of ones, its coefficient is the intercept
            let mut design = Array2::ones((n_samples, n_features + 1));
            design.slice_mut(s![.., ..n_features]).assign(X);

            let params = solve_least_squares(design, y.to_owned())?;
            FittedLinearRegression {
                intercept: params[n_features],
                params: params.slice(s![..n_features]).to_owned(),
            }
        } else {
            // The solver works in place, `dataset` is taken by reference. Therefore copy
            // the problem matrix and target vector.
            let (X, y) = (X.to_owned(), y.to_owned());

            FittedLinearRegression {
                intercept: F::zero(),
                params: solve_least_squares(X, y)?,
            }
        };

        debug!(
            "fitted least squares on {} samples, {} features, intercept {}",
            n_samples, n_features, fitted.intercept
        );

        Ok(fitted)
    }
}

/// Find the b that minimizes the 2-norm of X b - y
/// by using the QR least squares solver from linfa-linalg
fn solve_least_squares<F: Float>(mut X: Array2<F>, mut y: Array1<F>) -> Result<Array1<F>> {
    let (X, y) = (X.view_mut(), y.view_mut());

    let out = X
        .least_squares_into(y.insert_axis(Axis(1)))?
        .remove_axis(Axis(1));

    if out.iter().any(|x| !x.is_finite()) {
        return Err(LinearError::IllConditioned);
    }

    Ok(out)
}

/// View the fitted parameters and make predictions with a fitted
/// linear regresssion model.
impl<F: Float> FittedLinearRegression<F> {
    /// Get the fitted parameters
    pub fn params(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedLinearRegression<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to linear model
    /// learned from the training data distribution.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.params.len(),
            "The number of features must match the number of fitted parameters."
        );

        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use linreg::{traits::Predict, Dataset};
    use linreg_datasets::generate::linear_dataset;
    use ndarray::array;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn fits_a_line_through_two_dots() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(array![[0f64], [1.]], array![1., 2.]);
        let model = lin_reg.fit(&dataset).unwrap();
        let result = model.predict(dataset.records());

        assert_abs_diff_eq!(result, array![1., 2.], epsilon = 1e-12);
    }

    /// When `with_intercept` is set to false, the
    /// fitted line runs through the origin. For a perfect
    /// fit we only need to provide one point.
    #[test]
    fn without_intercept_fits_line_through_origin() {
        let lin_reg = LinearRegression::new().with_intercept(false);
        let dataset = Dataset::new(array![[1.]], array![1.]);
        let model = lin_reg.fit(&dataset).unwrap();
        let result = model.predict(&array![[0.], [1.]]);

        assert_abs_diff_eq!(result, array![0., 1.], epsilon = 1e-12);
        assert_eq!(model.intercept(), 0.);
    }

    /// We can't fit a line through two points without fitting the
    /// intercept in general. In this case we should find the solution
    /// that minimizes the squares. Fitting a line without intercept through
    /// the points (-1, 1), (1, 1) has the least-squares solution
    /// f(x) = 0
    #[test]
    fn fits_least_squares_line_through_two_dots() {
        let lin_reg = LinearRegression::new().with_intercept(false);
        let dataset = Dataset::new(array![[-1.], [1.]], array![1., 1.]);
        let model = lin_reg.fit(&dataset).unwrap();
        let result = model.predict(dataset.records());

        assert_abs_diff_eq!(result, array![0., 0.], epsilon = 1e-12);
    }

    /// We can't fit a line through three points in general
    /// - in this case we should find the solution that minimizes
    /// the squares. Fitting a line with intercept through the
    /// points (0, 0), (1, 0), (2, 2) has the least-squares solution
    /// f(x) = -1./3. + x
    #[test]
    fn fits_least_squares_line_through_three_dots() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![0., 0., 2.]);
        let model = lin_reg.fit(&dataset).unwrap();
        let actual = model.predict(dataset.records());

        assert_abs_diff_eq!(actual, array![-1. / 3., 2. / 3., 5. / 3.], epsilon = 1e-12);
    }

    /// Check that the linear regression prefectly fits three datapoints for
    /// the model
    /// f(x) = (x + 1)^2 = x^2 + 2x + 1
    #[test]
    fn fits_three_parameters_through_three_dots() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(array![[0f64, 0.], [1., 1.], [2., 4.]], array![1., 4., 9.]);
        let model = lin_reg.fit(&dataset).unwrap();

        assert_abs_diff_eq!(model.params(), &array![2., 1.], epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 1., epsilon = 1e-12);
    }

    /// Check that the linear regression prefectly fits four datapoints for
    /// the model
    /// f(x) = (x + 1)^3 = x^3 + 3x^2 + 3x + 1
    #[test]
    fn fits_four_parameters_through_four_dots() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(
            array![[0f64, 0., 0.], [1., 1., 1.], [2., 4., 8.], [3., 9., 27.]],
            array![1., 8., 27., 64.],
        );
        let model = lin_reg.fit(&dataset).unwrap();

        assert_abs_diff_eq!(model.params(), &array![3., 3., 1.], epsilon = 1e-10);
        assert_abs_diff_eq!(model.intercept(), 1., epsilon = 1e-10);
    }

    /// Check that the linear regression prefectly fits three datapoints for
    /// the model
    /// f(x) = (x + 1)^2 = x^2 + 2x + 1
    #[test]
    fn fits_three_parameters_through_three_dots_f32() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(array![[0f32, 0.], [1., 1.], [2., 4.]], array![1., 4., 9.]);
        let model = lin_reg.fit(&dataset).unwrap();

        assert_abs_diff_eq!(model.params(), &array![2., 1.], epsilon = 1e-4);
        assert_abs_diff_eq!(model.intercept(), 1., epsilon = 1e-4);
    }

    #[test]
    fn recovers_coefficients_of_noisy_data() {
        let mut rng = SmallRng::seed_from_u64(42);
        let dataset = linear_dataset(500, &array![938., -12.5], 152., 0.01, &mut rng);
        let model = LinearRegression::new().fit(&dataset).unwrap();

        assert_abs_diff_eq!(model.params(), &array![938., -12.5], epsilon = 1e-2);
        assert_abs_diff_eq!(model.intercept(), 152., epsilon = 1e-2);
    }

    /// Check that the linear regression model works with both owned and view
    /// representations of arrays
    #[test]
    fn works_with_viewed_and_owned_representations() {
        let lin_reg = LinearRegression::new();
        let dataset = Dataset::new(
            array![[0., 0., 0.], [1., 1., 1.], [2., 4., 8.], [3., 9., 27.]],
            array![1., 8., 27., 64.],
        );
        let dataset_view = dataset.view();

        let model1 = lin_reg.fit(&dataset).expect("can't fit owned arrays");
        let model2 = lin_reg
            .fit(&dataset_view)
            .expect("can't fit feature view with owned target");

        assert_abs_diff_eq!(model1.params(), model2.params(), epsilon = 1e-12);
        assert_abs_diff_eq!(model1.intercept(), model2.intercept(), epsilon = 1e-12);
    }

    #[test]
    fn predicts_a_split_of_the_training_data() {
        let dataset = Dataset::new(
            array![[0.], [1.], [2.], [3.], [4.]],
            array![1., 3., 5., 7., 9.],
        );
        let (train, test) = dataset.split_tail(2).unwrap();
        let model = LinearRegression::new().fit(&train).unwrap();

        assert_abs_diff_eq!(model.predict(&test), array![7., 9.], epsilon = 1e-10);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset::new(Array2::<f64>::zeros((0, 1)), Array1::zeros(0));

        assert!(matches!(
            LinearRegression::new().fit(&dataset),
            Err(LinearError::NotEnoughSamples)
        ));
    }

    #[test]
    fn zero_design_matrix_is_rejected() {
        let lin_reg = LinearRegression::new().with_intercept(false);
        let dataset = Dataset::new(array![[0.], [0.]], array![1., 2.]);

        assert!(lin_reg.fit(&dataset).is_err());
    }

    #[test]
    #[should_panic]
    fn predict_panics_on_feature_mismatch() {
        let dataset = Dataset::new(array![[0.], [1.]], array![1., 2.]);
        let model = LinearRegression::new().fit(&dataset).unwrap();

        let _ = model.predict(&array![[0., 1.]]);
    }
}
