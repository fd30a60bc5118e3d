use super::{
    from_parts, AsSingleTargets, AsTargets, Dataset, DatasetBase, DatasetView, Float, Records,
};
use crate::error::{Error, Result};
use crate::traits::{Predict, PredictInplace};
use ndarray::{s, Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};

/// Implementation without constraints on records and targets
///
/// This implementation block provides methods for the creation and access of datasets.
impl<R: Records, T> DatasetBase<R, T> {
    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        let feature_names = names.into_iter().map(|x| x.into()).collect();

        self.feature_names = feature_names;

        self
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results, for example
    /// correlation analysis or feature importance. Datasets without explicit names get
    /// `feature-<index>` placeholders.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (0..self.records.nfeatures())
                .map(|idx| format!("feature-{}", idx))
                .collect()
        }
    }
}

impl<R: Records, T: AsTargets> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Panics
    ///
    /// If the number of records and targets differ. Use [`DatasetBase::try_new`] for a checked
    /// variant.
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        let (nrecords, ntargets) = (records.nsamples(), targets.as_multi_targets().nrows());
        assert_eq!(
            nrecords, ntargets,
            "records and targets must have the same number of samples"
        );

        DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Create a new dataset, failing with `Error::MismatchedShapes` if the number of records
    /// and targets differ
    pub fn try_new(records: R, targets: T) -> Result<DatasetBase<R, T>> {
        let (nrecords, ntargets) = (records.nsamples(), targets.as_multi_targets().nrows());
        if nrecords != ntargets {
            return Err(Error::MismatchedShapes(nrecords, ntargets));
        }

        Ok(DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        })
    }
}

impl<F: Float, D, DT> DatasetBase<ArrayBase<D, Ix2>, ArrayBase<DT, Ix1>>
where
    D: Data<Elem = F>,
    DT: Data<Elem = F>,
{
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F, F> {
        DatasetBase {
            records: self.records.view(),
            targets: self.targets.view(),
            feature_names: self.feature_names.clone(),
        }
    }

    /// Keep a single feature column
    ///
    /// The selected column stays two-dimensional, the result has shape `(nsamples, 1)` with
    /// the values in their original order. Targets and the feature name are carried over.
    pub fn select_feature(&self, index: usize) -> Result<Dataset<F, F>> {
        let nfeatures = self.records.ncols();
        if index >= nfeatures {
            return Err(Error::FeatureOutOfRange { index, nfeatures });
        }

        let records = self.records.slice(s![.., index..index + 1]).to_owned();
        let feature_names = self
            .feature_names
            .get(index)
            .map(|name| vec![name.clone()])
            .unwrap_or_default();

        Ok(from_parts(records, self.targets.to_owned(), feature_names))
    }

    /// Hold out the last `ntest` samples
    ///
    /// Returns `(train, test)` where `train` contains samples `0..n-ntest` and `test` the
    /// remaining `ntest` samples, both for records and targets.
    pub fn split_tail(&self, ntest: usize) -> Result<(DatasetView<'_, F, F>, DatasetView<'_, F, F>)> {
        let nsamples = self.nsamples();
        if ntest > nsamples {
            return Err(Error::SplitOutOfRange { ntest, nsamples });
        }

        Ok(self.split_at(nsamples - ntest))
    }

    /// Split dataset into two disjoint chunks
    ///
    /// This function splits the observations in a dataset into two disjoint chunks. The splitting
    /// threshold is calculated with the `ratio`. For example a ratio of `0.9` allocates 90% to the
    /// first chunk and 10% to the second. This is often used in training, validation splitting
    /// procedures.
    pub fn split_with_ratio(
        &self,
        ratio: f32,
    ) -> Result<(DatasetView<'_, F, F>, DatasetView<'_, F, F>)> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::Parameters(format!(
                "split ratio should be in [0, 1], got {}",
                ratio
            )));
        }

        let n = (self.nsamples() as f32 * ratio).ceil() as usize;

        Ok(self.split_at(n.min(self.nsamples())))
    }

    fn split_at(&self, n: usize) -> (DatasetView<'_, F, F>, DatasetView<'_, F, F>) {
        let (records_first, records_second) = self.records.view().split_at(Axis(0), n);
        let (targets_first, targets_second) = self.targets.view().split_at(Axis(0), n);

        let first = DatasetBase {
            records: records_first,
            targets: targets_first,
            feature_names: self.feature_names.clone(),
        };
        let second = DatasetBase {
            records: records_second,
            targets: targets_second,
            feature_names: self.feature_names.clone(),
        };

        (first, second)
    }
}

impl<F: Float> From<(Array2<F>, Array1<F>)> for Dataset<F, F> {
    fn from(rec_tar: (Array2<F>, Array1<F>)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}

impl<'a, F: Float> From<(ArrayView2<'a, F>, ArrayView1<'a, F>)> for DatasetView<'a, F, F> {
    fn from(rec_tar: (ArrayView2<'a, F>, ArrayView1<'a, F>)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}

impl<R: Records, T: AsTargets> AsTargets for DatasetBase<R, T> {
    type Elem = T::Elem;

    fn as_multi_targets(&self) -> ArrayView2<'_, Self::Elem> {
        self.targets.as_multi_targets()
    }
}

impl<R: Records, T: AsSingleTargets> AsSingleTargets for DatasetBase<R, T> {
    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem> {
        self.targets.as_single_targets()
    }
}

/// Predict the targets of a feature matrix
impl<'a, D, T, O> Predict<&'a ArrayBase<D, Ix2>, T> for O
where
    D: Data,
    O: PredictInplace<ArrayBase<D, Ix2>, T>,
{
    fn predict(&self, records: &'a ArrayBase<D, Ix2>) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}

/// Predict the targets of the records of a dataset, ignoring its targets
impl<'a, R, T, S, O> Predict<&'a DatasetBase<R, T>, S> for O
where
    R: Records,
    O: PredictInplace<R, S>,
{
    fn predict(&self, ds: &'a DatasetBase<R, T>) -> S {
        let mut targets = self.default_target(&ds.records);
        self.predict_inplace(&ds.records, &mut targets);
        targets
    }
}
