use std::fmt::Debug;

/// Dense column-vector capabilities the training core relies on.
///
/// Any numerics library can back the network by implementing this trait and
/// [`MatrixOps`]; the bundled [`Vector`](crate::math::vector::Vector) is the
/// default. Operations on mismatched lengths are programming errors and may
/// panic.
pub trait VectorOps: Clone + Debug + PartialEq {
    fn zeros(len: usize) -> Self;

    fn from_slice(values: &[f64]) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[f64];

    /// Element-wise map.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64;

    fn sub(&self, rhs: &Self) -> Self;

    /// Element-wise (Hadamard) product.
    fn hadamard(&self, rhs: &Self) -> Self;

    fn add_assign(&mut self, rhs: &Self);

    /// `self ← self − k·rhs`
    fn scaled_sub_assign(&mut self, k: f64, rhs: &Self);
}

/// Dense matrix capabilities the training core relies on.
pub trait MatrixOps: Clone + Debug + PartialEq {
    type Vector: VectorOps;

    fn zeros(rows: usize, cols: usize) -> Self;

    /// Builds a `rows × cols` matrix where entry `(i, j)` is `f(i, j)`.
    fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn get(&self, row: usize, col: usize) -> f64;

    fn set(&mut self, row: usize, col: usize, value: f64);

    /// Matrix-vector product `self · v`.
    fn mul_vec(&self, v: &Self::Vector) -> Self::Vector;

    fn transpose(&self) -> Self;

    /// Outer product `col ⊗ rowᵗ`, shape `(col.len() × row.len())`.
    fn outer(col: &Self::Vector, row: &Self::Vector) -> Self;

    fn add_assign(&mut self, rhs: &Self);

    /// `self ← self − k·rhs`
    fn scaled_sub_assign(&mut self, k: f64, rhs: &Self);
}
