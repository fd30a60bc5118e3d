//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{
    Array1, Array2, ArrayBase, ArrayView1, ArrayView2, NdFloat, OwnedRepr, Ix1, Ix2,
};
use num_traits::{AsPrimitive, FromPrimitive, NumCast};

use std::iter::Sum;

mod impl_dataset;
mod impl_records;
mod impl_targets;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records of a dataset and,
/// for regression task, in the targets as well.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Sum
    + AsPrimitive<usize>
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and the aligned targets, plus optional feature names. In order to keep the type complexity
/// low the dataset base is only generic over the records and targets. `feature_names` are
/// always owned and copied when views are created.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with one entry per sample
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// # Invariants
///
/// Row `i` of the records belongs to entry `i` of the targets. All constructors and
/// transformations (feature selection, splitting) keep records and targets aligned.
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used typed of dataset. It contains a number of records
/// stored as an `Array2` and each record corresponds to a single target stored in
/// an `Array1`.
pub type Dataset<D, T> = DatasetBase<ArrayBase<OwnedRepr<D>, Ix2>, ArrayBase<OwnedRepr<T>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, D, T> = DatasetBase<ArrayView2<'a, D>, ArrayView1<'a, T>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a reference to the target variables as a matrix with one column per target
pub trait AsTargets {
    type Elem;

    /// Returns a view on targets as two-dimensional array
    fn as_multi_targets(&self) -> ArrayView2<'_, Self::Elem>;

    /// Number of target columns
    fn ntargets(&self) -> usize {
        self.as_multi_targets().ncols()
    }
}

/// Targets which are known to consist of exactly one variable
pub trait AsSingleTargets: AsTargets {
    /// Returns a view on the single target variable
    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem>;
}

/// Build an owned dataset from its parts, asserting nothing about alignment
pub(crate) fn from_parts<F>(
    records: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
) -> Dataset<F, F> {
    DatasetBase {
        records,
        targets,
        feature_names,
    }
}
