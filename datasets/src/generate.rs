//! Utility functions for randomly generating datasets

use linreg::Dataset;
use ndarray::{Array, Array1, Array2, ArrayBase, Data, Ix1};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{StandardNormal, Uniform},
    RandomExt,
};

/// Generate a dataset following a linear model
///
/// Records are drawn uniformly from `[-1, 1)` with shape `(nsamples, coefficients.len())`, the
/// targets are `records . coefficients + intercept` plus gaussian noise with standard deviation
/// `noise`. With `noise == 0.` the targets lie exactly on the hyperplane.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rand::{rngs::SmallRng, SeedableRng};
/// use linreg_datasets::generate::linear_dataset;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let dataset = linear_dataset(100, &array![2., -1.], 0.5, 0.1, &mut rng);
/// assert_eq!(dataset.records().dim(), (100, 2));
/// ```
pub fn linear_dataset(
    nsamples: usize,
    coefficients: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    intercept: f64,
    noise: f64,
    rng: &mut impl Rng,
) -> Dataset<f64, f64> {
    let records: Array2<f64> = Array::random_using(
        (nsamples, coefficients.len()),
        Uniform::new(-1., 1.),
        rng,
    );
    let mut targets = records.dot(coefficients) + intercept;

    if noise != 0. {
        let noise: Array1<f64> = Array::random_using(nsamples, StandardNormal, rng) * noise;
        targets += &noise;
    }

    Dataset::new(records, targets)
}
