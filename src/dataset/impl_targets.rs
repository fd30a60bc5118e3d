use super::{AsSingleTargets, AsTargets};
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};

/// A one-dimensional array acts as a single target column
impl<L, S: Data<Elem = L>> AsTargets for ArrayBase<S, Ix1> {
    type Elem = L;

    fn as_multi_targets(&self) -> ArrayView2<'_, L> {
        self.view().insert_axis(Axis(1))
    }
}

impl<L, S: Data<Elem = L>> AsSingleTargets for ArrayBase<S, Ix1> {
    fn as_single_targets(&self) -> ArrayView1<'_, L> {
        self.view()
    }
}

/// A two-dimensional array holds one target per column
impl<L, S: Data<Elem = L>> AsTargets for ArrayBase<S, Ix2> {
    type Elem = L;

    fn as_multi_targets(&self) -> ArrayView2<'_, L> {
        self.view()
    }
}

impl<T: AsTargets> AsTargets for &T {
    type Elem = T::Elem;

    fn as_multi_targets(&self) -> ArrayView2<'_, Self::Elem> {
        (*self).as_multi_targets()
    }
}

impl<T: AsSingleTargets> AsSingleTargets for &T {
    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem> {
        (*self).as_single_targets()
    }
}
