// SPDX-License-Identifier: AGPL-3.0-only

//! Dense complex helpers shared by the assemblers and the marker kernel.

use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};
use num_complex::Complex64;

/// Conjugate transpose A†.
pub fn dagger<S>(a: &ArrayBase<S, Ix2>) -> Array2<Complex64>
where
    S: Data<Elem = Complex64>,
{
    a.t().mapv(|z| z.conj())
}

/// Max |A − A†| over all entries; 0 for an exactly Hermitian matrix.
///
/// Returns `f64::INFINITY` for a non-square input.
pub fn hermiticity_defect<S>(a: &ArrayBase<S, Ix2>) -> f64
where
    S: Data<Elem = Complex64>,
{
    if a.nrows() != a.ncols() {
        return f64::INFINITY;
    }
    Zip::from(a)
        .and(a.t())
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y.conj()).norm()))
}

/// Promote a real matrix to complex.
pub fn embed_real<S>(a: &ArrayBase<S, Ix2>) -> Array2<Complex64>
where
    S: Data<Elem = f64>,
{
    a.mapv(|x| Complex64::new(x, 0.0))
}
